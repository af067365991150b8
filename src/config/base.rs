//! `[base]` section configuration.
//!
//! Site identity used in absolute URLs and page metadata.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml - site identity.
///
/// # Example
/// ```toml
/// [base]
/// url = "https://alice.github.io"
/// author = "Alice Liddell"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Canonical site URL without trailing slash, used by sitemap,
    /// Open-Graph tags and JSON-LD.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: String,

    /// Site owner, appended to Open-Graph titles. Empty means the
    /// profile name.
    #[serde(default)]
    pub author: String,
}

impl BaseConfig {
    /// Base URL with any trailing slashes removed.
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Take `name` as the author when none is configured.
    pub fn author_or(&mut self, name: &str) {
        if self.author.trim().is_empty() {
            self.author = name.to_owned();
        }
    }
}
