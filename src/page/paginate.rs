//! Pagination for the `page` list style.
//!
//! Page 1 lives at `/`, page `n` at `/page/{n}/`.

use super::Post;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub total_pages: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Pagination over `total` items. Always at least one page.
    pub fn new(total: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        Self {
            page: 1,
            total_pages: total.div_ceil(per_page).max(1),
            per_page,
        }
    }

    /// Move to `page`, clamped to the valid range.
    pub fn at(mut self, page: usize) -> Self {
        self.page = page.clamp(1, self.total_pages);
        self
    }

    /// Posts shown on the current page.
    pub fn slice<'a>(&self, posts: &'a [Post]) -> &'a [Post] {
        let start = (self.page - 1) * self.per_page;
        let end = (start + self.per_page).min(posts.len());
        posts.get(start..end).unwrap_or(&[])
    }

    /// Iterate every page of this pagination.
    pub fn pages(self) -> impl Iterator<Item = Self> {
        (1..=self.total_pages).map(move |page| self.at(page))
    }
}

/// Site-relative path of list page `page` under `base` (`/` or `/tag/rust/`).
pub fn page_path(base: &str, page: usize) -> String {
    let base = base.trim_end_matches('/');
    if page <= 1 {
        format!("{base}/")
    } else {
        format!("{base}/page/{page}/")
    }
}
