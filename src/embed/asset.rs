//! Embedded assets written to the output directory with content-hash filenames.

use super::{Template, TemplateVars};
use crate::utils::hash;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Embedded asset type, decides the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Js,
    Css,
}

impl AssetKind {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Css => "css",
        }
    }
}

/// An embedded asset rendered from a template.
///
/// The filename carries a fingerprint of the rendered content, so a changed
/// configuration produces a new URL: `catalog.1a2b3c4d.js`.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedAsset<V> {
    stem: &'static str,
    kind: AssetKind,
    template: Template<V>,
}

/// A rendered asset ready to be written.
#[derive(Debug, Clone)]
pub struct RenderedAsset {
    pub filename: String,
    pub content: String,
}

impl<V: TemplateVars> EmbeddedAsset<V> {
    pub const fn new(stem: &'static str, kind: AssetKind, content: &'static str) -> Self {
        Self {
            stem,
            kind,
            template: Template::new(content),
        }
    }

    /// Render the asset and compute its hashed filename.
    pub fn render(&self, vars: &V) -> RenderedAsset {
        let content = self.template.render(vars);
        let filename = format!(
            "{}.{}.{}",
            self.stem,
            hash::fingerprint(&content),
            self.kind.extension()
        );
        RenderedAsset { filename, content }
    }
}

impl RenderedAsset {
    /// Write into `dir`, returning the written filename.
    pub fn write(&self, dir: &Path) -> Result<&str> {
        let path = dir.join(&self.filename);
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write asset {}", path.display()))?;
        Ok(&self.filename)
    }
}
