//! Props for one rendered page.

use super::{CategoryOption, Pagination, Post, SiteData, TagOption};

/// Everything a layout reads.
///
/// Built from [`PageData::site`], which carries the site-wide parts, then
/// narrowed per page with the `with_*` builders.
#[derive(Debug, Clone)]
pub struct PageData {
    pub posts: Vec<Post>,
    /// `(group title, posts)` in display order
    pub archive_posts: Vec<(String, Vec<Post>)>,
    pub category_options: Vec<CategoryOption>,
    pub tag_options: Vec<TagOption>,
    pub keyword: Option<String>,
    /// Password-protected post; its body is never rendered
    pub lock: bool,
    pub post: Option<Post>,
    pub tag: Option<String>,
    pub category: Option<String>,
    pub page: usize,
    pub total_pages: usize,
    /// Site-relative base of the list pagination links
    pub list_base: String,
    pub notice: Option<Post>,
}

impl Default for PageData {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            archive_posts: Vec::new(),
            category_options: Vec::new(),
            tag_options: Vec::new(),
            keyword: None,
            lock: false,
            post: None,
            tag: None,
            category: None,
            page: 1,
            total_pages: 1,
            list_base: "/".to_owned(),
            notice: None,
        }
    }
}

impl PageData {
    /// Site-wide props: taxonomy options and the notice.
    pub fn site(site: &SiteData) -> Self {
        Self {
            category_options: site.category_options(),
            tag_options: site.tag_options(),
            notice: site.notice.clone(),
            ..Self::default()
        }
    }

    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    /// Select `post`; a password locks it.
    pub fn with_post(mut self, post: Post) -> Self {
        self.lock = post.is_locked();
        self.post = Some(post);
        self
    }

    pub fn with_archive(mut self, groups: Vec<(String, Vec<Post>)>) -> Self {
        self.archive_posts = groups;
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into()).filter(|k: &String| !k.is_empty());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination, base: impl Into<String>) -> Self {
        self.page = pagination.page;
        self.total_pages = pagination.total_pages;
        self.list_base = base.into();
        self
    }

    /// The selected post's table of contents, if it has entries.
    pub fn toc(&self) -> Option<&[crate::toc::TocEntry]> {
        self.post.as_ref().and_then(Post::toc_entries)
    }

    #[inline]
    pub fn full_width(&self) -> bool {
        self.post.as_ref().is_some_and(|post| post.full_width)
    }
}
