//! Page layouts of the nobelium theme.
//!
//! A [`LayoutKind`] selects one fixed composition of widgets; every variant is
//! wrapped by the base layout (`base`), which adds navigation, the catalog
//! sidebar and the page chrome.
//!
//! # Module Structure
//!
//! | Module      | Layouts                                      |
//! |-------------|----------------------------------------------|
//! | `base`      | document shell shared by every layout        |
//! | `list`      | `index`, `postList`, `search`                |
//! | `archive`   | `archive`                                    |
//! | `slug`      | `slug`                                       |
//! | `not_found` | `404`                                        |
//! | `taxonomy`  | `categoryIndex`, `tagIndex`                  |
//! | `widgets`   | `Widgets`: nav, footer, cards and other parts |
//! | `fallback`  | deferred marker check and redirect           |

mod archive;
mod base;
pub mod fallback;
mod list;
mod not_found;
mod slug;
mod taxonomy;
mod widgets;

pub use taxonomy::{category_path, tag_path};
pub use widgets::{DefaultWidgets, Widgets};

use crate::config::SiteConfig;
use crate::embed::AssetNames;
use crate::page::{FilterState, PageData};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Page template selected by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutKind {
    Index,
    PostList,
    Search,
    Archive,
    Slug,
    #[serde(rename = "404")]
    NotFound,
    CategoryIndex,
    TagIndex,
}

impl LayoutKind {
    pub const ALL: [Self; 8] = [
        Self::Index,
        Self::PostList,
        Self::Search,
        Self::Archive,
        Self::Slug,
        Self::NotFound,
        Self::CategoryIndex,
        Self::TagIndex,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::PostList => "postList",
            Self::Search => "search",
            Self::Archive => "archive",
            Self::Slug => "slug",
            Self::NotFound => "404",
            Self::CategoryIndex => "categoryIndex",
            Self::TagIndex => "tagIndex",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layout `{0}`")]
pub struct UnknownLayout(pub String);

impl FromStr for LayoutKind {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownLayout(s.to_owned()))
    }
}

/// Everything a layout needs besides the page data.
#[derive(Clone, Copy)]
pub struct ThemeContext<'a> {
    pub config: &'a SiteConfig,
    pub assets: &'a AssetNames,
    /// Filter key shared by the list layouts of this page.
    pub filter: &'a FilterState,
    pub widgets: &'a dyn Widgets,
}

impl<'a> ThemeContext<'a> {
    pub fn new(config: &'a SiteConfig, assets: &'a AssetNames, filter: &'a FilterState) -> Self {
        Self {
            config,
            assets,
            filter,
            widgets: &DefaultWidgets,
        }
    }

    pub fn with_widgets(mut self, widgets: &'a dyn Widgets) -> Self {
        self.widgets = widgets;
        self
    }

    /// Prefixed site URL for `path`.
    #[inline]
    pub fn url(&self, path: &str) -> String {
        self.config.url_for(path)
    }
}

/// Render a full HTML document for `kind`.
pub fn render_page(kind: LayoutKind, data: &PageData, ctx: &ThemeContext<'_>) -> String {
    let body = match kind {
        LayoutKind::Index => list::render_index(ctx, data),
        LayoutKind::PostList => list::render_post_list(ctx, data),
        LayoutKind::Search => list::render_search(ctx, data),
        LayoutKind::Archive => archive::render(ctx, data),
        LayoutKind::Slug => slug::render(ctx, data),
        LayoutKind::NotFound => not_found::render(ctx),
        LayoutKind::CategoryIndex => taxonomy::render_categories(ctx, data),
        LayoutKind::TagIndex => taxonomy::render_tags(ctx, data),
    };
    base::render(ctx, data, &body)
}

#[cfg(test)]
mod tests;
