//! Post list layouts: `index`, `postList` and `search`.

use super::ThemeContext;
use crate::config::PostListStyle;
use crate::page::{PageData, Post, page_path};
use crate::utils::html::{escape, escape_attr};
use regex::{Regex, RegexBuilder};
use std::fmt::Write;
use std::sync::LazyLock;

/// Classes of the keyword highlight span.
pub const HIGHLIGHT_CLASS: &str = "text-red-500 border-b border-dashed";

/// Markup tags, skipped by the highlighter.
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Character references; a highlight may not start or end inside one.
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);").expect("valid regex")
});

pub fn render_index(ctx: &ThemeContext<'_>, data: &PageData) -> String {
    let mut html = ctx.widgets.announcement(ctx, data);
    html.push_str(&post_list(ctx, data, None));
    html
}

pub fn render_post_list(ctx: &ThemeContext<'_>, data: &PageData) -> String {
    let mut html = String::new();
    if data.tag.is_some() {
        html.push_str(&ctx.widgets.search_nav_bar(ctx, data));
    }
    html.push_str(&post_list(ctx, data, None));
    html
}

pub fn render_search(ctx: &ThemeContext<'_>, data: &PageData) -> String {
    let mut html = ctx.widgets.search_nav_bar(ctx, data);
    html.push_str(&post_list(ctx, data, data.keyword.as_deref()));
    html
}

/// The filtered posts in the configured list style.
fn post_list(ctx: &ThemeContext<'_>, data: &PageData, keyword: Option<&str>) -> String {
    let posts = ctx.filter.apply(&data.posts);
    let mut html = posts_wrapper(ctx, &posts, keyword);
    if ctx.config.theme.post_list_style == PostListStyle::Page {
        html.push_str(&pagination(ctx, data));
    }
    html
}

fn posts_wrapper(ctx: &ThemeContext<'_>, posts: &[Post], keyword: Option<&str>) -> String {
    let mut cards = String::new();
    if posts.is_empty() {
        cards.push_str(r#"<p class="text-gray-500 dark:text-gray-300">No posts found.</p>"#);
    }
    for post in posts {
        cards.push_str(&ctx.widgets.post_card(ctx, post));
    }
    if let Some(keyword) = keyword {
        cards = highlight_keyword(&cards, keyword);
    }
    format!(r#"<div id="posts-wrapper">{cards}</div>"#)
}

fn pagination(ctx: &ThemeContext<'_>, data: &PageData) -> String {
    if data.total_pages <= 1 {
        return String::new();
    }

    let mut html = String::from(r#"<div class="nb-pagination font-medium text-black dark:text-gray-100">"#);
    let link = |page: usize, label: &str, rel: &str| {
        format!(
            r#"<a href="{}" rel="{rel}" class="block cursor-pointer">{label}</a>"#,
            escape_attr(&ctx.url(&page_path(&data.list_base, page)))
        )
    };

    if data.page > 1 {
        html.push_str(&link(data.page - 1, "&larr; Newer", "prev"));
    } else {
        html.push_str("<span></span>");
    }
    let _ = write!(html, "<span>{} / {}</span>", data.page, data.total_pages);
    if data.page < data.total_pages {
        html.push_str(&link(data.page + 1, "Older &rarr;", "next"));
    } else {
        html.push_str("<span></span>");
    }
    html.push_str("</div>");
    html
}

/// Wrap every case-insensitive occurrence of `keyword` in text content with a
/// highlight span. Tags and attribute values are left untouched.
pub fn highlight_keyword(html: &str, keyword: &str) -> String {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return html.to_owned();
    }
    let Ok(pattern) = RegexBuilder::new(&regex::escape(&escape(keyword)))
        .case_insensitive(true)
        .build()
    else {
        return html.to_owned();
    };

    let mark = |text: &str| {
        let entities: Vec<_> = ENTITY.find_iter(text).map(|m| m.range()).collect();
        let splits_entity = |at: usize| entities.iter().any(|e| e.start < at && at < e.end);

        let mut out = String::with_capacity(text.len());
        let (mut last, mut from) = (0, 0);
        while let Some(m) = pattern.find_at(text, from) {
            if splits_entity(m.start()) || splits_entity(m.end()) {
                from = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
                continue;
            }
            out.push_str(&text[last..m.start()]);
            let _ = write!(out, r#"<span class="{HIGHLIGHT_CLASS}">{}</span>"#, m.as_str());
            last = m.end();
            from = m.end();
        }
        out.push_str(&text[last..]);
        out
    };

    let mut out = String::with_capacity(html.len() + 64);
    let mut last = 0;
    for tag in TAG.find_iter(html) {
        out.push_str(&mark(&html[last..tag.start()]));
        out.push_str(tag.as_str());
        last = tag.end();
    }
    out.push_str(&mark(&html[last..]));
    out
}
