//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - placeholder substitution
//! - `asset` - Embedded asset types with content-hash filenames
//!
//! `catalog.js` and `theme.css` are minified by `build.rs` and included from
//! `OUT_DIR`.
//!
//! # Usage
//!
//! ```ignore
//! let urls = embed::write_embedded_assets(&config, &assets_dir)?;
//! // urls.catalog_js == "catalog.1a2b3c4d.js"
//! ```

mod asset;
mod template;

pub use asset::{AssetKind, EmbeddedAsset, RenderedAsset};
pub use template::{NoVars, Template, TemplateVars};

use crate::config::{CatalogConfig, SiteConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// Variables for catalog.js.
pub struct CatalogVars {
    pub active_threshold: f64,
    pub throttle_ms: u64,
    pub reveal_offset: f64,
}

impl CatalogVars {
    pub fn from_config(catalog: &CatalogConfig) -> Self {
        Self {
            active_threshold: catalog.active_threshold,
            throttle_ms: catalog.throttle_ms,
            reveal_offset: catalog.reveal_offset,
        }
    }
}

impl TemplateVars for CatalogVars {
    fn placeholders(&self) -> Vec<(&'static str, String)> {
        vec![
            ("__NB_ACTIVE_THRESHOLD__", self.active_threshold.to_string()),
            ("__NB_THROTTLE_MS__", self.throttle_ms.to_string()),
            ("__NB_REVEAL_OFFSET__", self.reveal_offset.to_string()),
        ]
    }
}

/// Scroll-spy, show-on-scroll and fallback runtime.
pub const CATALOG_JS: EmbeddedAsset<CatalogVars> = EmbeddedAsset::new(
    "catalog",
    AssetKind::Js,
    include_str!(concat!(env!("OUT_DIR"), "/catalog.min.js")),
);

/// Theme stylesheet.
pub const THEME_CSS: EmbeddedAsset<NoVars> = EmbeddedAsset::new(
    "theme",
    AssetKind::Css,
    include_str!(concat!(env!("OUT_DIR"), "/theme.min.css")),
);

/// Filenames of the written assets, relative to the assets directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetNames {
    pub catalog_js: String,
    pub theme_css: String,
}

/// Render the embedded assets for `config` without touching the filesystem.
pub fn render_embedded_assets(config: &SiteConfig) -> (RenderedAsset, RenderedAsset) {
    let js = CATALOG_JS.render(&CatalogVars::from_config(&config.catalog));
    let css = THEME_CSS.render(&NoVars);
    (js, css)
}

/// Write the embedded assets into `dir` (created if missing).
pub fn write_embedded_assets(config: &SiteConfig, dir: &Path) -> Result<AssetNames> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let (js, css) = render_embedded_assets(config);
    Ok(AssetNames {
        catalog_js: js.write(dir)?.to_string(),
        theme_css: css.write(dir)?.to_string(),
    })
}
