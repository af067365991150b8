//! Folio - builds a static academic portfolio site from JSON data files.

mod build;
mod cli;
mod config;
mod data;
mod generator;
mod inject;
mod pages;
mod render;
mod utils;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::Cli;
use config::SiteConfig;
use data::SiteData;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(&cli)?;
    let data = SiteData::load(&config)?;
    config.base.author_or(&data.profile.name);
    build_site(&config, &data)
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: every setting has a default and
/// the flags can override the rest.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        log!("config"; "{} not found, using defaults", config_path.display());
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
