//! `[build]` configuration.
//!
//! ```toml
//! [build]
//! data = "site.json"   # site data exported by the content loader
//! output = "public"    # output directory (relative to site root)
//! assets = "assets"    # embedded asset directory inside `output`
//! clean = false        # remove `output` before building
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub data: PathBuf,
    pub output: PathBuf,
    pub assets: String,
    pub clean: bool,

    /// URL path prefix derived from `site.url` (internal use only).
    #[serde(skip)]
    pub path_prefix: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            data: "site.json".into(),
            output: "public".into(),
            assets: "assets".into(),
            clean: false,
            path_prefix: String::new(),
        }
    }
}
