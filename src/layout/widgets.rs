//! Widgets composed by the layouts.
//!
//! Comments, share buttons, Live2D and the search modal belong to external
//! integrations; the defaults only leave a mount point for them. Override any
//! method to plug a different widget in.

use super::ThemeContext;
use crate::page::{PageData, Post};
use crate::utils::html::{escape, escape_attr};
use std::fmt::Write;

pub trait Widgets: Sync {
    fn nav(&self, ctx: &ThemeContext<'_>, _data: &PageData) -> String {
        let site = &ctx.config.site;
        let mut html = String::with_capacity(512);
        let _ = write!(
            html,
            r#"<div class="sticky-nav m-auto w-full h-6 flex flex-row justify-between items-center mb-2 md:mb-12 py-8 bg-opacity-60 max-w-2xl px-4"><a href="{}" aria-label="{}" class="flex items-center"><span class="font-medium text-gray-800 dark:text-gray-300">{}</span></a><ul class="flex flex-row">"#,
            escape_attr(&ctx.url("/")),
            escape_attr(&site.title),
            escape(&site.title),
        );
        for (path, label) in [
            ("/search", "Search"),
            ("/archive", "Archive"),
            ("/category", "Category"),
            ("/tag", "Tag"),
        ] {
            let _ = write!(
                html,
                r#"<li class="block ml-4 text-black dark:text-gray-50"><a href="{}">{}</a></li>"#,
                escape_attr(&ctx.url(path)),
                label
            );
        }
        html.push_str("</ul></div>");
        html
    }

    fn footer(&self, ctx: &ThemeContext<'_>, _data: &PageData) -> String {
        let site = &ctx.config.site;
        format!(
            r#"<footer class="mt-6 flex-shrink-0 m-auto w-full text-gray-500 dark:text-gray-400 transition-all max-w-2xl px-4"><hr class="border-gray-200 dark:border-gray-600"><div class="my-4 text-sm leading-6"><p>&copy; {} &middot; {}</p></div></footer>"#,
            escape(&site.author),
            escape(&site.title)
        )
    }

    /// Filter input above list layouts. Empty elsewhere.
    fn blog_list_bar(&self, ctx: &ThemeContext<'_>, data: &PageData) -> String {
        if data.post.is_some() || data.posts.is_empty() {
            return String::new();
        }
        format!(
            r#"<div class="relative mb-6"><input data-nb-filter type="text" placeholder="Search Articles" value="{}" class="block w-full border px-4 py-2 border-black bg-white text-black dark:bg-night dark:border-white dark:text-white"></div>"#,
            escape_attr(ctx.filter.filter_key())
        )
    }

    fn announcement(&self, _ctx: &ThemeContext<'_>, data: &PageData) -> String {
        match &data.notice {
            Some(notice) if !notice.html.trim().is_empty() => format!(
                r#"<div class="announcement mb-8 notion">{}</div>"#,
                notice.html
            ),
            _ => String::new(),
        }
    }

    fn search_nav_bar(&self, ctx: &ThemeContext<'_>, data: &PageData) -> String {
        let title = match (&data.tag, &data.keyword) {
            (Some(tag), _) => format!("#{}", escape(tag)),
            (None, Some(keyword)) => format!("Search: {}", escape(keyword)),
            (None, None) => "Search".to_owned(),
        };

        let mut html = format!(
            r#"<div class="mb-8"><h2 class="text-2xl font-bold text-black dark:text-white mb-4">{title}</h2><div class="flex flex-wrap gap-2">"#
        );
        for tag in &data.tag_options {
            let selected = data.tag.as_deref() == Some(tag.name.as_str());
            let _ = write!(
                html,
                r#"<a href="{}" class="px-2 py-1 text-xs rounded notion-{}_background{}">{}</a>"#,
                escape_attr(&ctx.url(&super::tag_path(&tag.name))),
                escape_attr(&tag.color),
                if selected { " font-bold" } else { "" },
                escape(&tag.name)
            );
        }
        html.push_str("</div></div>");
        html
    }

    /// One entry of a post list.
    fn post_card(&self, ctx: &ThemeContext<'_>, post: &Post) -> String {
        let date = post
            .parsed_date()
            .map(|date| {
                format!(
                    r#"<time class="flex-shrink-0 text-gray-600 dark:text-gray-400">{date}</time>"#
                )
            })
            .unwrap_or_default();
        format!(
            r#"<article data-nb-post data-nb-search="{}" class="mb-6 md:mb-8"><header class="flex flex-col justify-between md:flex-row md:items-baseline"><a href="{}"><h2 class="text-lg md:text-xl font-medium mb-2 cursor-pointer text-black dark:text-gray-100">{}</h2></a>{}</header><p class="hidden md:block leading-8 text-gray-700 dark:text-gray-300">{}</p></article>"#,
            escape_attr(&post.search_text().to_lowercase()),
            escape_attr(&ctx.url(&post.path())),
            escape(&post.title),
            date,
            escape(&post.summary)
        )
    }

    fn archive_item(&self, ctx: &ThemeContext<'_>, title: &str, posts: &[Post]) -> String {
        let mut html = format!(
            r#"<div id="{}"><div class="pt-16 pb-4 text-3xl dark:text-gray-300">{}</div><ul>"#,
            escape_attr(title),
            escape(title)
        );
        for post in posts {
            let date = post.parsed_date().map(|d| d.to_string()).unwrap_or_default();
            let _ = write!(
                html,
                r#"<li class="border-l-2 p-1 text-xs md:text-base items-center hover:border-gray-500 dark:border-gray-400"><span class="text-gray-400">{}</span> <a href="{}" class="dark:text-gray-400 hover:underline cursor-pointer text-gray-600">{}</a></li>"#,
                escape(&date),
                escape_attr(&ctx.url(&post.path())),
                escape(&post.title)
            );
        }
        html.push_str("</ul></div>");
        html
    }

    /// Notice shown instead of a password-protected post. Neither the body nor
    /// anything derived from the password is emitted.
    fn article_lock(&self, _ctx: &ThemeContext<'_>) -> String {
        r#"<div id="container" data-nb-lock class="flex justify-center items-center h-96"><div class="text-center space-y-3"><div class="font-bold dark:text-gray-300 text-black">This post is password protected.</div></div></div>"#.to_owned()
    }

    fn article_info(&self, ctx: &ThemeContext<'_>, post: &Post) -> String {
        let mut html = format!(
            r#"<section class="flex-wrap flex mt-2 text-gray-400 dark:text-gray-400 font-light leading-8"><div class="w-full"><h1 class="font-bold text-3xl text-black dark:text-white">{}</h1>"#,
            escape(&post.title)
        );
        html.push_str(r#"<div class="flex flex-wrap gap-2 text-sm">"#);
        if let Some(date) = post.parsed_date() {
            let _ = write!(html, "<time>{date}</time>");
        }
        if let Some(category) = &post.category {
            let _ = write!(
                html,
                r#"<a href="{}">{}</a>"#,
                escape_attr(&ctx.url(&super::category_path(category))),
                escape(category)
            );
        }
        for tag in &post.tags {
            let _ = write!(
                html,
                r#"<a href="{}">#{}</a>"#,
                escape_attr(&ctx.url(&super::tag_path(tag))),
                escape(tag)
            );
        }
        html.push_str("</div></div></section>");
        html
    }

    fn share_bar(&self, ctx: &ThemeContext<'_>, post: &Post) -> String {
        format!(
            r#"<div class="m-1 overflow-x-auto"><div data-nb-share="{}" class="flex w-full md:justify-end"></div></div>"#,
            escape_attr(&ctx.url(&post.path()))
        )
    }

    fn comment(&self, _ctx: &ThemeContext<'_>, post: &Post) -> String {
        format!(
            r#"<div id="comment" data-nb-comment="{}" class="duration-200 overflow-x-auto px-5"></div>"#,
            escape_attr(&post.slug)
        )
    }

    fn article_footer(&self, ctx: &ThemeContext<'_>) -> String {
        format!(
            r##"<div class="flex justify-between font-medium text-gray-500 dark:text-gray-400 my-5"><a href="{}">&larr; Back</a><a href="#">&uarr; Top</a></div>"##,
            escape_attr(&ctx.url("/"))
        )
    }

    fn jump_to_top(&self, _ctx: &ThemeContext<'_>) -> String {
        r##"<a href="#" title="Back to top" class="block p-2 text-gray-500 hover:text-black dark:hover:text-white">&uarr;</a>"##.to_owned()
    }

    fn live2d(&self, _ctx: &ThemeContext<'_>) -> String {
        String::new()
    }

    fn search_modal(&self, _ctx: &ThemeContext<'_>) -> String {
        r#"<div data-nb-search-modal hidden></div>"#.to_owned()
    }
}

/// The stock nobelium widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultWidgets;

impl Widgets for DefaultWidgets {}
