//! `[catalog]` configuration for the table of contents sidebar.
//!
//! ```toml
//! [catalog]
//! active_threshold = 150.0   # a heading is active once its top is above this offset
//! throttle_ms = 200          # scroll-spy recomputation interval
//! reveal_offset = 400.0      # show the sidebar after scrolling past this offset
//! indent_unit = 12           # left margin per indent level, in px
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub active_threshold: f64,
    pub throttle_ms: u64,
    pub reveal_offset: f64,
    pub indent_unit: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            active_threshold: 150.0,
            throttle_ms: 200,
            reveal_offset: 400.0,
            indent_unit: 12,
        }
    }
}

impl CatalogConfig {
    pub const ACTIVE_THRESHOLD: FieldPath = FieldPath::new("catalog.active_threshold");
    pub const REVEAL_OFFSET: FieldPath = FieldPath::new("catalog.reveal_offset");
    pub const THROTTLE_MS: FieldPath = FieldPath::new("catalog.throttle_ms");

    #[inline]
    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.active_threshold.is_finite() {
            diag.error(Self::ACTIVE_THRESHOLD, "must be a finite number");
        }
        if !self.reveal_offset.is_finite() || self.reveal_offset < 0.0 {
            diag.error(Self::REVEAL_OFFSET, "must be a non-negative number");
        }
        if self.throttle_ms == 0 {
            diag.error_with_hint(
                Self::THROTTLE_MS,
                "must be greater than 0",
                "200 keeps recomputation cheap while scrolling",
            );
        }
    }
}
