//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> String {
        "https://example.github.io".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn data() -> PathBuf {
        "data".into()
    }

    pub fn home() -> PathBuf {
        "index.html".into()
    }

    pub fn publications() -> PathBuf {
        "publications/index.html".into()
    }

    pub fn script() -> PathBuf {
        "assets/js/render.js".into()
    }

    pub fn sitemap() -> PathBuf {
        "sitemap.xml".into()
    }
}

// ============================================================================
// [publish] Section Defaults
// ============================================================================

pub mod publish {
    pub fn resume_pdf() -> String {
        "assets/pdf/resume.pdf".into()
    }

    pub fn cv_pdf() -> String {
        "assets/pdf/cv.pdf".into()
    }
}
