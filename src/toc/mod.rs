//! Table of contents model.
//!
//! A `TocEntry` is one heading of a post, in document order. Entry ids are
//! normalized with [`normalize_id`], the same transform applied to the
//! `data-id` attribute of rendered headings, so the scroll-spy result can be
//! compared to entry ids directly.

mod render;

pub use render::Catalog;

use serde::{Deserialize, Serialize};

/// One heading in a document's table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub indent_level: u32,
}

impl TocEntry {
    pub fn new(id: impl Into<String>, text: impl Into<String>, indent_level: u32) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            indent_level,
        }
    }

    /// Anchor id as rendered on the page.
    #[inline]
    pub fn anchor(&self) -> String {
        normalize_id(&self.id)
    }
}

/// Normalize a source identifier into an anchor id.
///
/// Block identifiers arrive either dashed (`8f3c0a1e-...`) or compact; both
/// map to the compact form. Idempotent.
///
/// ```ignore
/// assert_eq!(normalize_id("8f3c-0a1e"), "8f3c0a1e");
/// ```
#[inline]
pub fn normalize_id(id: &str) -> String {
    id.replace('-', "")
}

/// Map raw heading depths (0 for the shallowest heading kind) to indent levels.
///
/// A heading is never indented more than one level deeper than the heading it
/// follows, so skipped depths (h1 followed by h3) do not leave gaps. Returning
/// to a shallower depth pops back to the indent that depth had.
pub fn normalize_levels(depths: &[u32]) -> Vec<u32> {
    // (actual depth, effective indent); the sentinel sits below every depth.
    let mut stack: Vec<(i64, i64)> = vec![(-1, -1)];
    let mut levels = Vec::with_capacity(depths.len());

    for &depth in depths {
        let actual = i64::from(depth);
        loop {
            let (prev_actual, prev_effective) = stack[stack.len() - 1];
            if actual > prev_actual {
                let effective = prev_effective + 1;
                stack.push((actual, effective));
                levels.push(effective as u32);
                break;
            } else if actual == prev_actual {
                levels.push(prev_effective as u32);
                break;
            } else {
                stack.pop();
            }
        }
    }

    levels
}
