//! `slug` layout: a single post.

use super::ThemeContext;
use super::fallback::FallbackCheck;
use crate::page::PageData;

pub fn render(ctx: &ThemeContext<'_>, data: &PageData) -> String {
    let widgets = ctx.widgets;
    let mut html = String::new();

    if data.lock {
        html.push_str(&widgets.article_lock(ctx));
    } else if let Some(post) = &data.post {
        html.push_str(r#"<div class="px-2">"#);
        html.push_str(&widgets.article_info(ctx, post));
        html.push_str(r#"<div id="article-wrapper"><article id="notion-article" class="notion">"#);
        html.push_str(&post.html);
        html.push_str("</article></div>");
        html.push_str(&widgets.share_bar(ctx, post));
        html.push_str(&widgets.comment(ctx, post));
        html.push_str(&widgets.article_footer(ctx));
        html.push_str("</div>");
    }

    if data.post.is_none() {
        html.push_str(&FallbackCheck::missing_post(ctx.config).render());
    }
    html
}
