//! Config field path used by diagnostics.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// A config field path such as `catalog.throttle_ms`.
///
/// Sections expose their paths as associated constants so diagnostics never
/// spell a key by hand:
///
/// ```ignore
/// diag.error(CatalogConfig::THROTTLE_MS, "must be greater than 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(
            f,
            "{}",
            quoted.if_supports_color(Stream::Stderr, |text| text.bright_blue())
        )
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
