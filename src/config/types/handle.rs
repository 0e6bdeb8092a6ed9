//! Process-wide config, published once `nobelium.toml` is loaded.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Current config; defaults until [`init_config`] runs.
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let config = Arc::new(config);
    CONFIG.store(Arc::clone(&config));
    config
}
