//! `[theme]` configuration.
//!
//! ```toml
//! [theme]
//! post_list_style = "page"          # page | scroll
//! posts_per_page = 12
//! post_waiting_time_for_404 = 8     # seconds before a missing post redirects to /404
//! not_found_redirect_ms = 3000      # delay before the 404 page redirects home
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How post lists are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostListStyle {
    /// Numbered pages of `posts_per_page` posts.
    #[default]
    Page,
    /// Every post on one page.
    Scroll,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub post_list_style: PostListStyle,

    /// Posts per page when `post_list_style = "page"`.
    pub posts_per_page: usize,

    /// Seconds a post page waits for its article before redirecting to `/404`.
    pub post_waiting_time_for_404: u64,

    /// Milliseconds the 404 page waits before redirecting to `/`.
    pub not_found_redirect_ms: u64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            post_list_style: PostListStyle::Page,
            posts_per_page: 12,
            post_waiting_time_for_404: 8,
            not_found_redirect_ms: 3000,
        }
    }
}

impl ThemeConfig {
    pub const POSTS_PER_PAGE: FieldPath = FieldPath::new("theme.posts_per_page");

    #[inline]
    pub fn post_fallback_delay(&self) -> Duration {
        Duration::from_secs(self.post_waiting_time_for_404)
    }

    #[inline]
    pub fn not_found_delay(&self) -> Duration {
        Duration::from_millis(self.not_found_redirect_ms)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.posts_per_page == 0 {
            diag.error(Self::POSTS_PER_PAGE, "must be greater than 0");
        }
    }
}
