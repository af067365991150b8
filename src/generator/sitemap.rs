//! Sitemap generation.
//!
//! Lists the canonical URLs of the site for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!    <url>
//!       <loc>https://example.github.io/</loc>
//!       <lastmod>2025-01-01</lastmod>
//!       <changefreq>monthly</changefreq>
//!       <priority>1.0</priority>
//!    </url>
//! </urlset>
//! ```

use crate::data::Publication;
use chrono::NaiveDate;
use quick_xml::escape::escape;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Generate the sitemap: home, publications index, one entry per
/// publication, and the blog index when `include_blog` is set.
///
/// Every entry is stamped with `today`.
pub fn generate_sitemap(
    pubs: &[Publication],
    include_blog: bool,
    base_url: &str,
    today: NaiveDate,
) -> String {
    Sitemap::new(pubs, include_blog, base_url).into_xml(today)
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// How often a crawler should expect an entry to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeFreq {
    Monthly,
    Yearly,
}

impl ChangeFreq {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

/// Sitemap data structure
struct Sitemap {
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    changefreq: ChangeFreq,
    /// Relative priority, written as-is
    priority: &'static str,
}

impl UrlEntry {
    fn new(loc: String, changefreq: ChangeFreq, priority: &'static str) -> Self {
        Self {
            loc,
            changefreq,
            priority,
        }
    }
}

impl Sitemap {
    fn new(pubs: &[Publication], include_blog: bool, base_url: &str) -> Self {
        let mut urls = Vec::with_capacity(pubs.len() + 3);

        urls.push(UrlEntry::new(format!("{base_url}/"), ChangeFreq::Monthly, "1.0"));
        urls.push(UrlEntry::new(
            format!("{base_url}/publications/"),
            ChangeFreq::Monthly,
            "0.8",
        ));
        urls.extend(pubs.iter().map(|pub_| {
            UrlEntry::new(
                format!("{base_url}/publications/{}/", pub_.id),
                ChangeFreq::Yearly,
                "0.6",
            )
        }));
        if include_blog {
            urls.push(UrlEntry::new(format!("{base_url}/blog/"), ChangeFreq::Monthly, "0.7"));
        }

        Self { urls }
    }

    /// Generate sitemap XML string.
    fn into_xml(self, today: NaiveDate) -> String {
        let lastmod = today.format("%Y-%m-%d");
        let mut xml = String::with_capacity(256 + self.urls.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("   <url>\n");
            xml.push_str(&format!("      <loc>{}</loc>\n", escape(entry.loc.as_str())));
            xml.push_str(&format!("      <lastmod>{lastmod}</lastmod>\n"));
            xml.push_str(&format!(
                "      <changefreq>{}</changefreq>\n",
                entry.changefreq.as_str()
            ));
            xml.push_str(&format!("      <priority>{}</priority>\n", entry.priority));
            xml.push_str("   </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

// ============================================================================
// Tests
// ============================================================================
