//! `archive` layout.

use super::ThemeContext;
use crate::page::PageData;

pub fn render(ctx: &ThemeContext<'_>, data: &PageData) -> String {
    let mut html = String::from(r#"<div class="mb-10 pb-20 md:py-12 p-3 min-h-screen w-full">"#);
    for (title, posts) in &data.archive_posts {
        html.push_str(&ctx.widgets.archive_item(ctx, title, posts));
    }
    html.push_str("</div>");
    html
}
