//! Failed-load fallback for post and 404 pages.
//!
//! A post page that rendered without its article, and the 404 page itself,
//! schedule a deferred check for a marker element. When the check fires and
//! the marker is missing, the view redirects (`/404` for posts, `/` for the
//! 404 page).
//!
//! The timed check races slow but valid loads. When the data loader can say
//! how the load ended, [`LoadOutcome`] short-circuits it: `Loaded` cancels the
//! check, `Failed` redirects at once.

use crate::config::SiteConfig;
use crate::utils::html::escape_attr;
use std::time::{Duration, Instant};

/// Element whose presence proves the page content loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `#article-wrapper #notion-article`
    Article,
    /// `#article-wrapper`
    ArticleWrapper,
}

impl Marker {
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Article => "#article-wrapper #notion-article",
            Self::ArticleWrapper => "#article-wrapper",
        }
    }
}

/// Answers whether a marker is present in the current document.
pub trait MarkerProbe {
    fn has_marker(&self, marker: Marker) -> bool;
}

/// Probe over rendered page markup.
#[derive(Debug, Clone, Copy)]
pub struct RenderedHtml<'a>(pub &'a str);

impl MarkerProbe for RenderedHtml<'_> {
    fn has_marker(&self, marker: Marker) -> bool {
        let Some(wrapper) = self.0.find(r#"id="article-wrapper""#) else {
            return false;
        };
        match marker {
            Marker::ArticleWrapper => true,
            Marker::Article => self.0[wrapper..].contains(r#"id="notion-article""#),
        }
    }
}

impl MarkerProbe for bool {
    fn has_marker(&self, _marker: Marker) -> bool {
        *self
    }
}

/// Client-side navigation to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub target: String,
}

/// Load result reported by the data loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// A deferred marker check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackCheck {
    pub delay: Duration,
    pub marker: Marker,
    pub target: String,
}

impl FallbackCheck {
    /// Post page rendered without a post: wait for the article, then `/404`.
    pub fn missing_post(config: &SiteConfig) -> Self {
        Self {
            delay: config.theme.post_fallback_delay(),
            marker: Marker::Article,
            target: config.url_for("/404"),
        }
    }

    /// The 404 page: wait for an article wrapper, then home.
    pub fn not_found(config: &SiteConfig) -> Self {
        Self {
            delay: config.theme.not_found_delay(),
            marker: Marker::ArticleWrapper,
            target: config.url_for("/"),
        }
    }

    /// Schedule this check at `now`.
    pub fn schedule(self, now: Instant) -> PendingCheck {
        PendingCheck {
            due: now + self.delay,
            check: self,
        }
    }

    /// Resolve against a probe, ignoring the delay.
    pub fn resolve(&self, probe: &dyn MarkerProbe) -> Option<Redirect> {
        (!probe.has_marker(self.marker)).then(|| Redirect {
            target: self.target.clone(),
        })
    }

    /// Resolve against an explicit load outcome.
    pub fn resolve_outcome(&self, outcome: LoadOutcome) -> Option<Redirect> {
        match outcome {
            LoadOutcome::Loaded => None,
            LoadOutcome::Failed => Some(Redirect {
                target: self.target.clone(),
            }),
        }
    }

    /// Markup read by `catalog.js`.
    pub fn render(&self) -> String {
        format!(
            r#"<div data-nb-fallback data-marker="{}" data-target="{}" data-delay="{}" hidden></div>"#,
            escape_attr(self.marker.selector()),
            escape_attr(&self.target),
            self.delay.as_millis()
        )
    }
}

/// A scheduled check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCheck {
    pub check: FallbackCheck,
    pub due: Instant,
}

impl PendingCheck {
    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}
