//! Optional HTML escaping at the markup boundary.
//!
//! Renderers interpolate record fields verbatim. When the data directory is
//! not trusted (`[build] escape_html = true`), callers hand them an escaped
//! copy from [`for_html`]. Loaded records always keep their raw values:
//! JSON-LD bodies and url-encoded links are built from those.

use super::{
    SiteData,
    types::{
        Blog, BlogPlatform, BlogPost, EducationEntry, ExperienceEntry, InterestCategory, LinkMap,
        Profile, ProfileLink, Project, Publication,
    },
};
use quick_xml::escape::escape;
use std::borrow::Cow;

/// In-place HTML escaping of every string a record carries.
pub trait EscapeHtml {
    fn escape_html(&mut self);
}

impl EscapeHtml for String {
    fn escape_html(&mut self) {
        if let Cow::Owned(escaped) = escape(self.as_str()) {
            *self = escaped;
        }
    }
}

impl<T: EscapeHtml> EscapeHtml for Option<T> {
    fn escape_html(&mut self) {
        if let Some(inner) = self {
            inner.escape_html();
        }
    }
}

impl<T: EscapeHtml> EscapeHtml for Vec<T> {
    fn escape_html(&mut self) {
        self.iter_mut().for_each(EscapeHtml::escape_html);
    }
}

impl EscapeHtml for LinkMap {
    fn escape_html(&mut self) {
        self.labels_mut().for_each(EscapeHtml::escape_html);
        self.values_mut().for_each(EscapeHtml::escape_html);
    }
}

/// `value` ready for HTML interpolation: an escaped copy when `escape` is
/// set, the value itself otherwise.
pub fn for_html<T: EscapeHtml + Clone>(value: &T, escape: bool) -> Cow<'_, T> {
    if escape {
        let mut escaped = value.clone();
        escaped.escape_html();
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(value)
    }
}

/// Implement `EscapeHtml` for a record by escaping the listed fields.
macro_rules! escape_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl EscapeHtml for $ty {
            fn escape_html(&mut self) {
                $( self.$field.escape_html(); )*
            }
        }
    };
}

escape_fields!(Profile { name, role, organization, bio, location, links });
escape_fields!(ProfileLink { href, label, icon });
escape_fields!(EducationEntry { degree, school, year, details });
escape_fields!(InterestCategory { category, items });
escape_fields!(ExperienceEntry { role, company, location, period, level, details });
escape_fields!(Publication { id, title, authors, venue, kind, abstract_text, links, tags });
escape_fields!(Project { name, href, description, stack, image });
escape_fields!(Blog { name, tagline, platforms, posts });
escape_fields!(BlogPlatform { name, url, icon, featured_video_id });
escape_fields!(BlogPost { id, title, date, summary, url, tags });
escape_fields!(SiteData { profile, education, interests, experience, publications, projects, blog });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_string() {
        let mut s = String::from(r#"<b>Fish & "Chips"</b>"#);
        s.escape_html();
        assert_eq!(s, "&lt;b&gt;Fish &amp; &quot;Chips&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_escape_plain_string_unchanged() {
        let mut s = String::from("Plain title");
        s.escape_html();
        assert_eq!(s, "Plain title");
    }

    #[test]
    fn test_escape_publication_fields() {
        let mut pub_ = Publication {
            id: "p1".into(),
            title: "A<B".into(),
            authors: vec!["O'Neil".into()],
            abstract_text: Some("x > y".into()),
            links: [("paper", "http://x?a=1&b=2")].into_iter().collect(),
            ..Default::default()
        };
        pub_.escape_html();

        assert_eq!(pub_.id, "p1");
        assert_eq!(pub_.title, "A&lt;B");
        assert_eq!(pub_.authors, vec!["O&apos;Neil"]);
        assert_eq!(pub_.abstract_text.as_deref(), Some("x &gt; y"));
        assert_eq!(pub_.links.get("paper"), Some("http://x?a=1&amp;b=2"));
    }

    #[test]
    fn test_for_html() {
        let title = String::from("Fish & Chips");
        assert_eq!(*for_html(&title, false), "Fish & Chips");
        assert!(matches!(for_html(&title, false), Cow::Borrowed(_)));
        assert_eq!(*for_html(&title, true), "Fish &amp; Chips");
        assert_eq!(title, "Fish & Chips");
    }

    #[test]
    fn test_escape_option_none_is_noop() {
        let mut link = ProfileLink {
            href: "https://x".into(),
            label: "R&D".into(),
            icon: None,
        };
        link.escape_html();
        assert_eq!(link.label, "R&amp;D");
        assert!(link.icon.is_none());
    }
}
