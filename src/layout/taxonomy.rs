//! `categoryIndex` and `tagIndex` layouts.

use super::ThemeContext;
use crate::page::PageData;
use crate::utils::html::{escape, escape_attr};
use crate::utils::slug::path_segment;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt::Write;

/// Characters escaped in a path segment, matching `encodeURIComponent`.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Site-relative path of a tag page. The build writes it to
/// `tag/{path_segment(name)}/`.
pub fn tag_path(name: &str) -> String {
    format!("/tag/{}", utf8_percent_encode(&path_segment(name), SEGMENT))
}

/// Site-relative path of a category page.
pub fn category_path(name: &str) -> String {
    format!("/category/{}", utf8_percent_encode(&path_segment(name), SEGMENT))
}

pub fn render_categories(ctx: &ThemeContext<'_>, data: &PageData) -> String {
    let mut html = String::from(r#"<div id="category-list" class="duration-200 flex flex-wrap">"#);
    for category in &data.category_options {
        let _ = write!(
            html,
            r#"<a href="{}" class="hover:text-black dark:hover:text-white dark:text-gray-300 dark:hover:bg-gray-600 px-5 cursor-pointer py-2 hover:bg-gray-100">{}({})</a>"#,
            escape_attr(&ctx.url(&category_path(&category.name))),
            escape(&category.name),
            category.count
        );
    }
    html.push_str("</div>");
    html
}

pub fn render_tags(ctx: &ThemeContext<'_>, data: &PageData) -> String {
    let mut html = String::from(r#"<div id="tags-list" class="duration-200 flex flex-wrap">"#);
    for tag in &data.tag_options {
        let label = if tag.count > 0 {
            format!("{}({})", tag.name, tag.count)
        } else {
            tag.name.clone()
        };
        let _ = write!(
            html,
            r#"<div class="p-2"><a href="{}" class="cursor-pointer inline-block rounded hover:bg-gray-500 hover:text-white duration-200 mr-2 py-1 px-2 text-xs whitespace-nowrap text-gray-600 notion-{}_background dark:bg-gray-800"><div class="font-light dark:text-gray-400">{}</div></a></div>"#,
            escape_attr(&ctx.url(&tag_path(&tag.name))),
            escape_attr(&tag.color),
            escape(&label)
        );
    }
    html.push_str("</div>");
    html
}
