//! `[publish]` section configuration.
//!
//! Feature toggles for optional site regions.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[publish]` section in folio.toml.
///
/// Both toggles can be overridden per run with `--publish-blog` and
/// `--publish-resume`.
///
/// # Example
/// ```toml
/// [publish]
/// blog = true
/// resume = true
/// resume_pdf = "assets/pdf/Alice_Resume.pdf"
/// cv_pdf = "assets/pdf/Alice_CV.pdf"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    /// Generate the blog index, the home blog section and the nav link.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub blog: bool,

    /// Show resume/cv links in the about section.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub resume: bool,

    /// Resume link target, relative to the home document.
    #[serde(default = "defaults::publish::resume_pdf")]
    #[educe(Default = defaults::publish::resume_pdf())]
    pub resume_pdf: String,

    /// CV link target, relative to the home document.
    #[serde(default = "defaults::publish::cv_pdf")]
    #[educe(Default = defaults::publish::cv_pdf())]
    pub cv_pdf: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_publish_defaults_off() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert!(!config.publish.blog);
        assert!(!config.publish.resume);
        assert_eq!(config.publish.resume_pdf, "assets/pdf/resume.pdf");
        assert_eq!(config.publish.cv_pdf, "assets/pdf/cv.pdf");
    }

    #[test]
    fn test_publish_enabled() {
        let config: SiteConfig = toml::from_str(
            r#"
            [publish]
            blog = true
            resume = true
            cv_pdf = "cv/latest.pdf"
        "#,
        )
        .unwrap();

        assert!(config.publish.blog);
        assert!(config.publish.resume);
        assert_eq!(config.publish.cv_pdf, "cv/latest.pdf");
    }
}
