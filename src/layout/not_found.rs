//! `404` layout.

use super::ThemeContext;
use super::fallback::FallbackCheck;

pub fn render(ctx: &ThemeContext<'_>) -> String {
    let mut html = String::from(concat!(
        r#"<div class="md:-mt-20 text-black w-full h-screen text-center justify-center content-center items-center flex flex-col">"#,
        r#"<div class="dark:text-gray-200">"#,
        r#"<h2 class="inline-block border-r-2 border-gray-600 mr-2 px-3 py-2 align-top">404</h2>"#,
        r#"<div class="inline-block text-left h-32 leading-10 items-center">"#,
        r#"<h2 class="m-0 p-0">This page could not be loaded. Returning to the home page.</h2>"#,
        "</div></div></div>",
    ));
    html.push_str(&FallbackCheck::not_found(ctx.config).render());
    html
}
