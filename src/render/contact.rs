//! `contact` section: one button per profile link.

use super::non_empty;
use crate::data::Profile;

pub fn render_contact_section(profile: &Profile) -> String {
    let links_html = profile
        .links
        .iter()
        .map(|link| {
            let icon_html = non_empty(link.icon.as_ref())
                .map(|icon| format!(r#"<i class="{icon}"></i>"#))
                .unwrap_or_default();
            format!(
                r#"<a href="{href}" class="btn btn-outline" target="_blank">
                {icon_html} {label}
            </a>"#,
                href = link.href,
                label = link.label,
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        r#"<section id="contact">
        <div style="text-align: center; max-width: 800px; margin: 0 auto;">
            <h2>Contact</h2>
            <p style="margin-bottom: 2rem;">Feel free to reach out for collaborations or questions.</p>
            <div class="filters" style="justify-content: center; gap: 0.75rem;">
                {links_html}
            </div>
        </div>
    </section>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ProfileLink;

    fn profile(links: Vec<ProfileLink>) -> Profile {
        Profile {
            name: "Ada".into(),
            links,
            ..Default::default()
        }
    }

    #[test]
    fn test_contact_buttons() {
        let html = render_contact_section(&profile(vec![
            ProfileLink {
                href: "https://github.com/ada".into(),
                label: "GitHub".into(),
                icon: Some("bi bi-github".into()),
            },
            ProfileLink {
                href: "mailto:ada@quill.dev".into(),
                label: "Email".into(),
                icon: None,
            },
        ]));

        assert_eq!(html.matches(r#"class="btn btn-outline""#).count(), 2);
        assert!(html.contains(r#"<i class="bi bi-github"></i> GitHub"#));
        // No icon: no <i>, label keeps its leading space
        assert!(html.contains("\n                 Email\n"));
        assert_eq!(html.matches("<i ").count(), 1);
        assert!(html.find("GitHub").unwrap() < html.find("Email").unwrap());
    }

    #[test]
    fn test_contact_without_links() {
        let html = render_contact_section(&profile(vec![]));
        assert!(html.contains("<h2>Contact</h2>"));
        assert!(!html.contains("btn-outline"));
    }
}
