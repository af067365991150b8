//! Record types read from the data directory.
//!
//! Field names follow the JSON documents; renamed fields carry a
//! `#[serde(rename)]`. Optional collections accept both a missing key and an
//! explicit `null`.

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};
use std::fmt;

// ============================================================================
// Profile
// ============================================================================

/// `profile.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    #[serde(rename = "org")]
    pub organization: String,
    pub bio: String,
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<ProfileLink>,
}

/// One external profile link (scholar page, code forge, email, ...).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileLink {
    pub href: String,
    pub label: String,
    /// Icon font class, e.g. `bi bi-github`.
    #[serde(default)]
    pub icon: Option<String>,
}

/// One item of `education.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// One item of `interests.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterestCategory {
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<String>,
}

/// One item of `experience.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub location: String,
    /// Free-form, e.g. `2021 - Present`.
    pub period: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Vec<String>,
}

impl ExperienceEntry {
    /// A position is current when its period mentions "present" in any case.
    pub fn is_current(&self) -> bool {
        self.period.to_lowercase().contains("present")
    }
}

// ============================================================================
// Publications & Projects
// ============================================================================

/// One item of `publications.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Publication {
    /// URL slug and directory name under `publications/`.
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    pub venue: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: LinkMap,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// One item of `projects.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    pub name: String,
    pub href: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub stack: String,
    #[serde(default)]
    pub image: Option<String>,
}

// ============================================================================
// Blog
// ============================================================================

/// `blog.json`
#[derive(Debug, Clone, Deserialize)]
pub struct Blog {
    #[serde(default = "default_blog_name")]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platforms: Vec<BlogPlatform>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub posts: Vec<BlogPost>,
}

impl Default for Blog {
    fn default() -> Self {
        Self {
            name: default_blog_name(),
            tagline: String::new(),
            platforms: Vec::new(),
            posts: Vec::new(),
        }
    }
}

fn default_blog_name() -> String {
    "Blog".into()
}

/// A platform the blog is published on (video channel, newsletter, ...).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPlatform {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub featured_video_id: Option<String>,
}

/// One blog post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// ISO 8601 date, compared lexicographically.
    pub date: String,
    #[serde(default)]
    pub summary: String,
    /// External location of the post, if hosted elsewhere.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

// ============================================================================
// LinkMap
// ============================================================================

/// Label → URL pairs in document order.
///
/// JSON objects are read entry by entry so the rendered links row follows
/// the order the author wrote them in. A repeated label keeps its first
/// position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMap(Vec<(String, String)>);

impl LinkMap {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// URL for `label`, treating an empty URL as absent.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    pub(super) fn values_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.0.iter_mut().map(|(_, v)| v)
    }

    pub(super) fn labels_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.0.iter_mut().map(|(k, _)| k)
    }

    fn insert(&mut self, label: String, url: String) {
        match self.0.iter_mut().find(|(k, _)| *k == label) {
            Some((_, v)) => *v = url,
            None => self.0.push((label, url)),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LinkMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut links = Self::default();
        for (k, v) in iter {
            links.insert(k.into(), v.into());
        }
        links
    }
}

impl<'de> Deserialize<'de> for LinkMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LinkMapVisitor;

        impl<'de> Visitor<'de> for LinkMapVisitor {
            type Value = LinkMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of link labels to URLs")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut links = LinkMap::default();
                while let Some((label, url)) = map.next_entry::<String, String>()? {
                    links.insert(label, url);
                }
                Ok(links)
            }
        }

        deserializer.deserialize_map(LinkMapVisitor)
    }
}

// ============================================================================
// Deserialize Helpers
// ============================================================================

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accept `"2019"` as well as `2019`.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    Ok(match Year::deserialize(deserializer)? {
        Year::Text(s) => s,
        Year::Number(n) => n.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================
