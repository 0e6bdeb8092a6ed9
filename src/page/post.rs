//! A single post of the site data.

use serde::{Deserialize, Serialize};

use crate::article::render_article;
use crate::toc::TocEntry;
use crate::utils::date::PostDate;

/// Deserialize tags, treating `null` as empty vec
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// A post as read from the site data.
///
/// | Field       | Description                                         |
/// |-------------|-----------------------------------------------------|
/// | `slug`      | path segment, unique across the site                |
/// | `title`     | display title                                       |
/// | `summary`   | short description shown in lists                    |
/// | `tags`      | tag names                                           |
/// | `category`  | optional category name                              |
/// | `date`      | `YYYY-MM-DD`, optionally with a time part           |
/// | `content`   | markdown body                                       |
/// | `toc`       | explicit table of contents, else extracted          |
/// | `fullWidth` | render without the narrow column                    |
/// | `password`  | locks the post; never serialized back out           |
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub summary: String,
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub content: String,
    pub toc: Option<Vec<TocEntry>>,
    pub full_width: bool,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// Rendered body, filled by [`Post::prepare`].
    #[serde(skip)]
    pub html: String,
}

impl Post {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[inline]
    pub fn parsed_date(&self) -> Option<PostDate> {
        self.date.as_deref().and_then(PostDate::parse)
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Text the keyword filter matches against.
    pub fn search_text(&self) -> String {
        format!("{}{}{}", self.title, self.summary, self.tags.join(" "))
    }

    /// Site-relative path of the post page.
    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }

    /// Render the markdown body. An explicit `toc` in the data wins over the
    /// extracted one.
    pub fn prepare(&mut self) {
        let article = render_article(&self.content);
        self.html = article.html;
        if self.toc.is_none() {
            self.toc = Some(article.toc);
        }
    }

    #[inline]
    pub fn toc_entries(&self) -> Option<&[TocEntry]> {
        self.toc.as_deref().filter(|toc| !toc.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_and_null_tags() {
        let json = r#"{"slug":"a","title":"A","tags":null,"fullWidth":true,"password":"pw"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.tags.is_empty());
        assert!(post.full_width);
        assert!(post.is_locked());
    }

    #[test]
    fn test_password_is_not_serialized() {
        let mut post = Post::new("a", "A");
        post.password = Some("pw".into());
        let json = serde_json::to_string(&post).unwrap();
        assert!(!json.contains("pw"));
        assert!(!json.contains("html"));
    }

    #[test]
    fn test_search_text_concatenation() {
        let post = Post::new("foo", "Foo").with_summary("bar").with_tags(["x", "y"]);
        assert_eq!(post.search_text(), "Foobarx y");
    }

    #[test]
    fn test_prepare_keeps_explicit_toc() {
        let mut extracted = Post::new("a", "A");
        extracted.content = "## One\n".into();
        extracted.prepare();
        assert_eq!(extracted.toc_entries().map(<[_]>::len), Some(1));
        assert!(extracted.html.contains(r#"data-id="one""#));

        let mut explicit = Post::new("b", "B");
        explicit.content = "## One\n".into();
        explicit.toc = Some(vec![TocEntry::new("x", "X", 0)]);
        explicit.prepare();
        assert_eq!(explicit.toc_entries().unwrap()[0].id, "x");
    }

    #[test]
    fn test_empty_toc_counts_as_none() {
        let mut post = Post::new("a", "A");
        post.prepare();
        assert_eq!(post.toc, Some(Vec::new()));
        assert!(post.toc_entries().is_none());
    }

    #[test]
    fn test_empty_password_does_not_lock() {
        let mut post = Post::new("a", "A");
        post.password = Some(String::new());
        assert!(!post.is_locked());
    }
}
