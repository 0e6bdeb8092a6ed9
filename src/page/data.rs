//! Site data loading.
//!
//! The data file is a JSON object:
//!
//! ```json
//! {
//!   "posts": [{ "slug": "hello", "title": "Hello", "content": "# Hi" }],
//!   "notice": { "slug": "notice", "title": "Notice", "content": "..." },
//!   "tagColors": { "rust": "orange" }
//! }
//! ```

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use thiserror::Error;

use super::Post;
use crate::utils::slug::is_path_segment;
use super::group::{CategoryOption, TagOption, archive_groups, category_options, tag_options};

/// Site data errors
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Site data parsing error")]
    Json(#[from] serde_json::Error),

    #[error("Post #{0} has no slug")]
    MissingSlug(usize),

    #[error("Duplicate post slug `{0}`")]
    DuplicateSlug(String),

    #[error("Post slug `{0}` collides with a built-in page")]
    ReservedSlug(String),

    #[error("Post slug `{0}` is not a single path segment")]
    InvalidSlug(String),
}

/// Top-level routes owned by list and index pages.
const RESERVED_SLUGS: [&str; 6] = ["archive", "search", "category", "tag", "page", "404"];

/// Every post plus site-wide extras.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteData {
    pub posts: Vec<Post>,
    pub notice: Option<Post>,
    pub tag_colors: FxHashMap<String, String>,
}

impl SiteData {
    /// Read and validate the data file at `path`.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content =
            std::fs::read_to_string(path).map_err(|err| DataError::Io(path.to_path_buf(), err))?;
        Self::from_json(&content)
    }

    /// Parse and validate site data.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let data: Self = serde_json::from_str(json)?;
        data.check_slugs()?;
        Ok(data)
    }

    fn check_slugs(&self) -> Result<(), DataError> {
        let mut seen = FxHashSet::default();
        for (index, post) in self.posts.iter().enumerate() {
            if post.slug.is_empty() {
                return Err(DataError::MissingSlug(index));
            }
            if !is_path_segment(&post.slug) {
                return Err(DataError::InvalidSlug(post.slug.clone()));
            }
            if RESERVED_SLUGS.contains(&post.slug.as_str()) {
                return Err(DataError::ReservedSlug(post.slug.clone()));
            }
            if !seen.insert(post.slug.as_str()) {
                return Err(DataError::DuplicateSlug(post.slug.clone()));
            }
        }
        Ok(())
    }

    /// Render every article body in parallel.
    pub fn prepare(&mut self) {
        self.posts.par_iter_mut().for_each(Post::prepare);
        if let Some(notice) = self.notice.as_mut() {
            notice.prepare();
        }
    }

    pub fn category_options(&self) -> Vec<CategoryOption> {
        category_options(&self.posts)
    }

    pub fn tag_options(&self) -> Vec<TagOption> {
        tag_options(&self.posts, &self.tag_colors)
    }

    pub fn archive_posts(&self) -> Vec<(String, Vec<Post>)> {
        archive_groups(&self.posts)
    }

    /// Posts carrying `tag`.
    pub fn posts_tagged(&self, tag: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| post.tags.iter().any(|t| t == tag))
            .cloned()
            .collect()
    }

    /// Posts in `category`.
    pub fn posts_in_category(&self, category: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| post.category.as_deref() == Some(category))
            .cloned()
            .collect()
    }
}
