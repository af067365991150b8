//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Site identity (canonical url, author)            |
//! | `[build]`   | Data directory, patched documents, post-process  |
//! | `[publish]` | Optional regions (blog, resume)                  |
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://alice.github.io"
//! author = "Alice Liddell"
//!
//! [build]
//! data = "data"
//! minify = false
//!
//! [publish]
//! blog = false
//! resume = true
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod publish;

pub use base::BaseConfig;
pub use build::BuildConfig;
pub use error::ConfigError;
pub use publish::PublishConfig;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Optional region toggles
    #[serde(default)]
    pub publish: PublishConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.data, cli.data.as_ref());
        Self::update_option(&mut self.build.minify, cli.minify.as_ref());
        Self::update_option(&mut self.base.url, cli.base_url.as_ref());
        Self::update_option(&mut self.publish.blog, cli.publish_blog().as_ref());
        Self::update_option(&mut self.publish.resume, cli.publish_resume().as_ref());

        self.update_path_with_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.build.data = Self::normalize_path(&root.join(&self.build.data));
        self.build.home = Self::normalize_path(&root.join(&self.build.home));
        self.build.publications = Self::normalize_path(&root.join(&self.build.publications));
        self.build.script = Self::normalize_path(&root.join(&self.build.script));
        self.build.sitemap = Self::normalize_path(&root.join(&self.build.sitemap));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before building
    pub fn validate(&self) -> Result<()> {
        if !self.base.url.starts_with("http") {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        let paths = [
            ("[build.data]", &self.build.data),
            ("[build.home]", &self.build.home),
            ("[build.publications]", &self.build.publications),
            ("[build.script]", &self.build.script),
            ("[build.sitemap]", &self.build.sitemap),
        ];
        for (field, path) in paths {
            if path.as_os_str().is_empty() {
                bail!(ConfigError::Validation(format!("{field} must not be empty")));
            }
        }

        if self.publish.resume && self.publish.resume_pdf.is_empty() {
            bail!(ConfigError::Validation(
                "[publish.resume] = true requires [publish.resume_pdf] to be set".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
