//! Command-line interface definitions.
//!
//! Defines all CLI arguments using clap.

use clap::Parser;
use std::path::PathBuf;

/// Folio static pre-rendering CLI
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Site root directory (default: ./)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// Data directory path (relative to site root)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Include the blog section, blog index page and blog nav link
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub publish_blog: Option<bool>,

    /// Leave the blog out, whatever folio.toml says
    #[arg(long, hide = true, conflicts_with = "publish_blog")]
    pub no_publish_blog: bool,

    /// Include resume/cv links in the about section
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub publish_resume: Option<bool>,

    /// Leave resume/cv links out, whatever folio.toml says
    #[arg(long, hide = true, conflicts_with = "publish_resume")]
    pub no_publish_resume: bool,

    /// Minify the generated pages and sitemap
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Override base URL for the site.
    ///
    /// Useful for previewing a fork or a staging deployment without
    /// touching folio.toml:
    ///   folio --base-url "https://staging.example.org"
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Blog publishing override, `--no-publish-blog` included.
    pub fn publish_blog(&self) -> Option<bool> {
        if self.no_publish_blog { Some(false) } else { self.publish_blog }
    }

    /// Resume publishing override, `--no-publish-resume` included.
    pub fn publish_resume(&self) -> Option<bool> {
        if self.no_publish_resume { Some(false) } else { self.publish_resume }
    }
}
