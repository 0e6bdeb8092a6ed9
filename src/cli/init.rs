//! Site initialization.
//!
//! Writes a commented `nobelium.toml` with every default spelled out, plus a
//! starter `site.json` when none exists.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::fs;

/// Starter site data.
const SAMPLE_DATA: &str = r##"{
  "posts": [
    {
      "slug": "hello-nobelium",
      "title": "Hello, nobelium",
      "summary": "A first post to check the theme.",
      "tags": ["nobelium"],
      "category": "notes",
      "date": "2024-01-01",
      "content": "# Getting started\n\nEdit `site.json` and run `nobelium build`.\n\n## Table of contents\n\nHeadings show up in the sidebar once you scroll.\n"
    }
  ],
  "tagColors": { "nobelium": "blue" }
}
"##;

/// Create the config file (and sample data) for the site at `config.root`.
pub fn init_site(config: &SiteConfig, force: bool) -> Result<()> {
    let config_path = &config.config_path;
    if config_path.exists() && !force {
        bail!(
            "`{}` already exists.\nUse `nobelium init --force` to overwrite it.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(config_path, generate_config_template()?)
        .with_context(|| format!("Failed to write config file '{}'", config_path.display()))?;
    log!("init"; "wrote {}", config_path.display());

    let data_path = config.data_path();
    if !data_path.exists() {
        fs::write(&data_path, SAMPLE_DATA)
            .with_context(|| format!("Failed to write '{}'", data_path.display()))?;
        log!("init"; "wrote {}", data_path.display());
    }

    Ok(())
}

/// Default configuration as TOML, with a version header.
pub fn generate_config_template() -> Result<String> {
    let body = toml::to_string_pretty(&SiteConfig::default())
        .context("Failed to serialize default config")?;
    Ok(format!(
        "# nobelium configuration file (v{})\n\n{body}",
        env!("CARGO_PKG_VERSION")
    ))
}
