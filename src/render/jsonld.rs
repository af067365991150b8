//! schema.org JSON-LD blocks for crawlers.
//!
//! Both generators build a `serde_json::Value`, pretty-print it with
//! two-space indentation (keys stay in insertion order) and wrap it in a
//! `<script type="application/ld+json">` element.

use crate::data::{EducationEntry, Profile, Publication};
use serde_json::{Value, json};

/// Wrap a JSON-LD value in its script element.
///
/// Values are raw record text, never HTML entities. `</` is written as the
/// JSON escape `<\/` so no value can close the element.
fn script(schema: &Value) -> String {
    // Serializing a `Value` cannot fail: all keys are strings.
    let body = serde_json::to_string_pretty(schema)
        .unwrap_or_default()
        .replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">\n{body}\n</script>")
}

/// `Person` for the home page.
///
/// Education becomes `alumniOf` credentials; only links with an `http(s)`
/// scheme are listed in `sameAs` (mail links and relative paths are not
/// identities).
pub fn person_jsonld(profile: &Profile, education: &[EducationEntry], base_url: &str) -> String {
    let alumni_of: Vec<Value> = education
        .iter()
        .map(|edu| {
            json!({
                "@type": "EducationalOccupationalCredential",
                "credentialCategory": edu.degree,
                "recognizedBy": {"@type": "EducationalOrganization", "name": edu.school},
            })
        })
        .collect();
    let same_as: Vec<&str> = profile
        .links
        .iter()
        .map(|link| link.href.as_str())
        .filter(|href| href.starts_with("http"))
        .collect();

    script(&json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": profile.name,
        "jobTitle": profile.role,
        "worksFor": {"@type": "Organization", "name": profile.organization},
        "url": format!("{base_url}/"),
        "sameAs": same_as,
        "alumniOf": alumni_of,
    }))
}

/// `ScholarlyArticle` for a publication page.
///
/// `sameAs` points at the paper itself and is only present when the
/// publication has a `paper` link.
pub fn scholarly_article_jsonld(pub_: &Publication, base_url: &str) -> String {
    let authors: Vec<Value> = pub_
        .authors
        .iter()
        .map(|name| json!({"@type": "Person", "name": name}))
        .collect();

    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "ScholarlyArticle",
        "name": pub_.title,
        "headline": pub_.title,
        "author": authors,
        "datePublished": pub_.year.to_string(),
        "isPartOf": {"@type": "Periodical", "name": pub_.venue},
        "description": pub_.abstract_text.as_deref().unwrap_or_default(),
        "url": format!("{base_url}/publications/{}/", pub_.id),
    });
    if let (Some(paper), Some(map)) = (pub_.links.get("paper"), schema.as_object_mut()) {
        map.insert("sameAs".into(), paper.into());
    }

    script(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ProfileLink;

    const BASE: &str = "https://ada.github.io";

    /// Parse the JSON body back out of the script wrapper.
    fn body(script: &str) -> Value {
        let inner = script
            .strip_prefix("<script type=\"application/ld+json\">\n")
            .and_then(|s| s.strip_suffix("\n</script>"))
            .expect("script wrapper");
        serde_json::from_str(inner).unwrap()
    }

    fn profile() -> Profile {
        Profile {
            name: "Ada Quill".into(),
            role: "Research Scientist".into(),
            organization: "Northwind Labs".into(),
            links: vec![
                ProfileLink {
                    href: "https://github.com/ada".into(),
                    label: "GitHub".into(),
                    icon: None,
                },
                ProfileLink {
                    href: "mailto:ada@quill.dev".into(),
                    label: "Email".into(),
                    icon: None,
                },
                ProfileLink {
                    href: "http://old.example/ada".into(),
                    label: "Old".into(),
                    icon: None,
                },
            ],
            ..Default::default()
        }
    }

    fn publication() -> Publication {
        Publication {
            id: "p1".into(),
            title: "Foo".into(),
            authors: vec!["A. Bee".into(), "C. Dee".into()],
            venue: "ICML".into(),
            year: 2023,
            kind: "paper".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_person_fields() {
        let education = vec![EducationEntry {
            degree: "PhD".into(),
            school: "Mountain University".into(),
            year: "2024".into(),
            details: None,
        }];
        let value = body(&person_jsonld(&profile(), &education, BASE));

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], "Ada Quill");
        assert_eq!(value["jobTitle"], "Research Scientist");
        assert_eq!(value["worksFor"]["name"], "Northwind Labs");
        assert_eq!(value["url"], "https://ada.github.io/");
        assert_eq!(value["alumniOf"][0]["@type"], "EducationalOccupationalCredential");
        assert_eq!(value["alumniOf"][0]["credentialCategory"], "PhD");
        assert_eq!(value["alumniOf"][0]["recognizedBy"]["name"], "Mountain University");
    }

    #[test]
    fn test_person_same_as_only_external() {
        let value = body(&person_jsonld(&profile(), &[], BASE));
        assert_eq!(
            value["sameAs"],
            json!(["https://github.com/ada", "http://old.example/ada"])
        );
        assert_eq!(value["alumniOf"], json!([]));
    }

    #[test]
    fn test_person_key_order_and_indent() {
        let script = person_jsonld(&profile(), &[], BASE);
        assert!(script.starts_with("<script type=\"application/ld+json\">\n{\n  \"@context\""));
        let context = script.find("\"@context\"").unwrap();
        let alumni = script.find("\"alumniOf\"").unwrap();
        assert!(context < alumni);
        assert!(script.ends_with("}\n</script>"));
    }

    #[test]
    fn test_article_fields() {
        let value = body(&scholarly_article_jsonld(&publication(), BASE));

        assert_eq!(value["@type"], "ScholarlyArticle");
        assert_eq!(value["name"], "Foo");
        assert_eq!(value["headline"], "Foo");
        assert_eq!(value["author"][1]["name"], "C. Dee");
        assert_eq!(value["datePublished"], "2023");
        assert_eq!(value["isPartOf"]["name"], "ICML");
        assert_eq!(value["description"], "");
        assert_eq!(value["url"], "https://ada.github.io/publications/p1/");
        assert!(value.get("sameAs").is_none());
    }

    #[test]
    fn test_article_same_as_with_paper_link() {
        let mut pub_ = publication();
        pub_.links = [("code", "http://c"), ("paper", "http://x")].into_iter().collect();
        pub_.abstract_text = Some("We study foo.".into());
        let value = body(&scholarly_article_jsonld(&pub_, BASE));

        assert_eq!(value["sameAs"], "http://x");
        assert_eq!(value["description"], "We study foo.");
    }

    #[test]
    fn test_article_keeps_raw_text() {
        let mut pub_ = publication();
        pub_.title = "Fish & Chips </script>".into();
        pub_.authors = vec!["O'Neil".into()];
        let script = scholarly_article_jsonld(&pub_, BASE);

        assert_eq!(script.matches("</script>").count(), 1);
        let value = body(&script);
        assert_eq!(value["name"], "Fish & Chips </script>");
        assert_eq!(value["author"][0]["name"], "O'Neil");
    }

    #[test]
    fn test_article_without_paper_link_has_no_same_as() {
        let mut pub_ = publication();
        pub_.links = [("code", "http://c")].into_iter().collect();
        let value = body(&scholarly_article_jsonld(&pub_, BASE));
        assert!(value.get("sameAs").is_none());
    }
}
