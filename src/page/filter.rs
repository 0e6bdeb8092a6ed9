//! Keyword filtering of post lists.

use super::Post;

/// Page-scoped filter key.
///
/// Each page view owns one; layouts receive it through the theme context
/// rather than a global.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    key: String,
}

impl FilterState {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[inline]
    pub fn filter_key(&self) -> &str {
        &self.key
    }

    pub fn set_filter_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    /// Apply the current key to `posts`.
    pub fn apply(&self, posts: &[Post]) -> Vec<Post> {
        filter_posts(posts, &self.key)
    }
}

/// Keep posts whose title, summary and tags contain `key`, ignoring case.
///
/// An empty key returns every post. The input is never modified.
pub fn filter_posts(posts: &[Post], key: &str) -> Vec<Post> {
    if key.is_empty() {
        return posts.to_vec();
    }

    let needle = key.to_lowercase();
    posts
        .iter()
        .filter(|post| post.search_text().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
