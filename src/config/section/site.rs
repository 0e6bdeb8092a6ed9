//! `[site]` configuration.
//!
//! ```toml
//! [site]
//! title = "My Blog"
//! author = "Jane"
//! description = "Notes on things"
//! url = "https://example.github.io/blog"
//! language = "en"
//! font_style = "font-sans"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site metadata rendered into the page head, nav and footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Site description.
    pub description: String,

    /// Site URL, path used as link prefix (e.g., "https://example.com/blog").
    pub url: Option<String>,

    /// Language code (e.g., "en", "zh-CN").
    pub language: String,

    /// Font class applied to the theme wrapper (`font-sans` / `font-serif`).
    pub font_style: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "nobelium".into(),
            author: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
            font_style: "font-sans".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// `url` must be an absolute URL with a scheme.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url
            && url::Url::parse(url).is_err()
        {
            diag.error_with_hint(
                Self::URL,
                format!("`{url}` is not a valid URL"),
                "use a full URL such as \"https://example.com\"",
            );
        }
    }
}
