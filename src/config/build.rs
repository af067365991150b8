//! `[build]` section configuration.
//!
//! Input/output locations and output post-processing.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml - where data comes from and which
/// documents get patched.
///
/// # Example
/// ```toml
/// [build]
/// data = "data"                         # JSON records
/// home = "index.html"                   # home document (patched)
/// publications = "publications/index.html"
/// script = "assets/js/render.js"        # shared nav script (patched)
/// sitemap = "sitemap.xml"
/// minify = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Site root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Directory holding the JSON data documents.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Home document receiving the pre-rendered sections.
    #[serde(default = "defaults::build::home")]
    #[educe(Default = defaults::build::home())]
    pub home: PathBuf,

    /// Publications listing document receiving the full list.
    #[serde(default = "defaults::build::publications")]
    #[educe(Default = defaults::build::publications())]
    pub publications: PathBuf,

    /// Shared script asset carrying the navigation bar markup.
    #[serde(default = "defaults::build::script")]
    #[educe(Default = defaults::build::script())]
    pub script: PathBuf,

    /// Sitemap output path.
    #[serde(default = "defaults::build::sitemap")]
    #[educe(Default = defaults::build::sitemap())]
    pub sitemap: PathBuf,

    /// Minify generated pages and the sitemap. Patched templates are
    /// never minified.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// HTML-escape every string read from the data directory.
    ///
    /// Off by default: the data directory is trusted and may carry markup
    /// (e.g. `&middot;` or `<em>` inside a bio).
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub escape_html: bool,
}
