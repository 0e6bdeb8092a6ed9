//! Document shell shared by every layout.

use super::ThemeContext;
use crate::page::PageData;
use crate::toc::Catalog;
use crate::utils::html::{class_list, escape, escape_attr};
use std::fmt::Write;

const WRAPPER: &str =
    "nobelium relative dark:text-gray-300 w-full bg-white dark:bg-black min-h-screen flex flex-col scroll-smooth";
const MAIN: &str = "relative m-auto flex-grow w-full transition-all";
const MAIN_NARROW: &str = "max-w-2xl px-4";
const MAIN_FULL: &str = "px-4 md:px-24";

/// Wrap a layout body in the full document.
pub fn render(ctx: &ThemeContext<'_>, data: &PageData, body: &str) -> String {
    let widgets = ctx.widgets;
    let mut html = String::with_capacity(body.len() + 4096);

    render_head(&mut html, ctx, data);

    let _ = write!(
        html,
        r#"<body><div id="theme-nobelium" class="{}">"#,
        class_list([ctx.config.site.font_style.as_str(), WRAPPER])
    );
    html.push_str(&widgets.nav(ctx, data));

    let width = if data.full_width() { MAIN_FULL } else { MAIN_NARROW };
    let _ = write!(
        html,
        r#"<main id="out-wrapper" class="{}">"#,
        class_list([MAIN, width])
    );
    html.push_str(&widgets.blog_list_bar(ctx, data));
    html.push_str(body);
    if data.post.is_some() && !data.lock {
        let catalog = Catalog::new(data.toc()).indent_unit(ctx.config.catalog.indent_unit);
        html.push_str(&catalog.render());
    }
    html.push_str("</main>");

    html.push_str(&widgets.footer(ctx, data));
    let _ = write!(
        html,
        r#"<div class="fixed right-4 bottom-4">{}</div>"#,
        widgets.jump_to_top(ctx)
    );
    let _ = write!(
        html,
        r#"<div class="bottom-4 -left-14 fixed justify-end z-40">{}</div>"#,
        widgets.live2d(ctx)
    );
    html.push_str(&widgets.search_modal(ctx));
    html.push_str("</div></body></html>");
    html
}

fn render_head(html: &mut String, ctx: &ThemeContext<'_>, data: &PageData) {
    let site = &ctx.config.site;
    let title = match &data.post {
        Some(post) if !post.title.is_empty() => format!("{} | {}", post.title, site.title),
        _ => site.title.clone(),
    };
    let description = data
        .post
        .as_ref()
        .map(|post| post.summary.as_str())
        .filter(|summary| !summary.is_empty())
        .unwrap_or(&site.description);

    let _ = write!(
        html,
        concat!(
            r#"<!DOCTYPE html><html lang="{lang}"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            r#"<title>{title}</title><meta name="description" content="{description}">"#,
            r#"<link rel="stylesheet" href="{css}"><script defer src="{js}"></script></head>"#,
        ),
        lang = escape_attr(&site.language),
        title = escape(&title),
        description = escape_attr(description),
        css = escape_attr(&ctx.config.asset_url(&ctx.assets.theme_css)),
        js = escape_attr(&ctx.config.asset_url(&ctx.assets.catalog_js)),
    );
}
