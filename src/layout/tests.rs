use super::fallback::{Marker, MarkerProbe, RenderedHtml};
use super::*;
use crate::config::PostListStyle;
use crate::page::{Pagination, Post, SiteData};
use crate::toc::TocEntry;

const HIGHLIGHT: &str = r#"<span class="text-red-500 border-b border-dashed">"#;

fn assets() -> AssetNames {
    AssetNames {
        catalog_js: "catalog.0011aabb.js".into(),
        theme_css: "theme.ccdd2233.css".into(),
    }
}

fn site() -> SiteData {
    let mut data = SiteData::from_json(
        r###"{
            "posts": [
                {"slug": "hello", "title": "Hello Rust", "summary": "first steps", "tags": ["rust"],
                 "category": "dev", "date": "2024-03-02", "content": "# Intro\n\n## Setup\n"},
                {"slug": "web", "title": "Web notes", "summary": "css tricks", "tags": ["web", "C++"],
                 "category": "dev", "date": "2024-01-20", "content": "plain"},
                {"slug": "secret", "title": "Secret", "password": "pw", "content": "## Hidden\n"}
            ],
            "tagColors": {"rust": "orange"}
        }"###,
    )
    .unwrap();
    data.prepare();
    data
}

fn render(kind: LayoutKind, data: &PageData) -> String {
    render_with(kind, data, &SiteConfig::default(), &FilterState::default())
}

fn render_with(
    kind: LayoutKind,
    data: &PageData,
    config: &SiteConfig,
    filter: &FilterState,
) -> String {
    let assets = assets();
    let ctx = ThemeContext::new(config, &assets, filter);
    render_page(kind, data, &ctx)
}

fn post(site: &SiteData, slug: &str) -> Post {
    site.posts.iter().find(|p| p.slug == slug).cloned().unwrap()
}

#[test]
fn test_layout_kind_names() {
    for kind in LayoutKind::ALL {
        assert_eq!(kind.as_str().parse::<LayoutKind>(), Ok(kind));
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
    }
    assert_eq!("404".parse::<LayoutKind>(), Ok(LayoutKind::NotFound));
    assert_eq!(
        "home".parse::<LayoutKind>(),
        Err(UnknownLayout("home".into()))
    );
}

#[test]
fn test_base_shell() {
    let site = site();
    let data = PageData::site(&site).with_posts(site.posts.clone());
    let html = render(LayoutKind::Index, &data);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<html lang="en">"#));
    assert!(html.contains(r#"<title>nobelium</title>"#));
    assert!(html.contains(r#"href="/assets/theme.ccdd2233.css""#));
    assert!(html.contains(r#"src="/assets/catalog.0011aabb.js""#));
    assert!(html.contains(r#"<div id="theme-nobelium" class="font-sans nobelium"#));
    assert!(html.contains(
        r#"<main id="out-wrapper" class="relative m-auto flex-grow w-full transition-all max-w-2xl px-4">"#
    ));
    assert!(html.contains(r#"<div class="fixed right-4 bottom-4">"#));
    assert!(html.contains("data-nb-search-modal"));
    // list pages get the filter bar and no catalog
    assert!(html.contains("data-nb-filter"));
    assert!(!html.contains("data-nb-catalog"));
}

#[test]
fn test_index_shows_notice_then_posts() {
    let mut site = site();
    site.notice = Some(Post {
        html: "<p>Welcome</p>".into(),
        ..Post::new("notice", "Notice")
    });
    let data = PageData::site(&site).with_posts(site.posts.clone());
    let html = render(LayoutKind::Index, &data);

    let notice = html.find("<p>Welcome</p>").unwrap();
    let posts = html.find(r#"id="posts-wrapper""#).unwrap();
    assert!(notice < posts);
    assert_eq!(html.matches("data-nb-post ").count(), 3);
}

#[test]
fn test_slug_renders_article_and_catalog() {
    let site = site();
    let data = PageData::site(&site).with_post(post(&site, "hello"));
    let html = render(LayoutKind::Slug, &data);

    assert!(html.contains(r#"<title>Hello Rust | nobelium</title>"#));
    assert!(html.contains(r#"<div id="article-wrapper"><article id="notion-article" class="notion">"#));
    assert!(html.contains(r#"class="notion-h notion-h2""#));
    assert!(html.contains("data-nb-catalog"));
    assert!(html.contains(r##"href="#setup" data-nb-toc-id="setup""##));
    assert!(html.contains(r#"id="comment""#));
    assert!(!html.contains("data-nb-fallback"));
    assert!(!html.contains("data-nb-filter"));
    assert!(RenderedHtml(&html).has_marker(Marker::Article));
}

#[test]
fn test_slug_full_width() {
    let site = site();
    let mut wide = post(&site, "hello");
    wide.full_width = true;
    let html = render(LayoutKind::Slug, &PageData::site(&site).with_post(wide));
    assert!(html.contains(
        r#"<main id="out-wrapper" class="relative m-auto flex-grow w-full transition-all px-4 md:px-24">"#
    ));
}

#[test]
fn test_slug_without_toc_has_no_catalog() {
    let site = site();
    let html = render(
        LayoutKind::Slug,
        &PageData::site(&site).with_post(post(&site, "web")),
    );
    assert!(html.contains(r#"id="notion-article""#));
    assert!(!html.contains("data-nb-catalog"));
}

#[test]
fn test_slug_missing_post_schedules_fallback() {
    let site = site();
    let html = render(LayoutKind::Slug, &PageData::site(&site));

    assert!(html.contains(r##"data-marker="#article-wrapper #notion-article""##));
    assert!(html.contains(r#"data-target="/404""#));
    assert!(html.contains(r#"data-delay="8000""#));
    assert!(!RenderedHtml(&html).has_marker(Marker::Article));
    assert!(!html.contains("data-nb-catalog"));
}

#[test]
fn test_locked_post_hides_body_and_catalog() {
    let site = site();
    let data = PageData::site(&site).with_post(post(&site, "secret"));
    let html = render(LayoutKind::Slug, &data);

    assert!(html.contains("data-nb-lock"));
    assert!(!html.contains("data-nb-digest"));
    assert!(!html.contains(r#"type="password""#));
    assert!(!html.contains(blake3::hash(b"pw").to_hex().as_str()));
    assert!(!html.contains(r#"id="article-wrapper""#));
    assert!(!html.contains("Hidden"));
    assert!(!html.contains("data-nb-catalog"));
    assert!(!html.contains("data-nb-fallback"));
}

#[test]
fn test_not_found_schedules_home_redirect() {
    let html = render(LayoutKind::NotFound, &PageData::default());
    assert!(html.contains(">404</h2>"));
    assert!(html.contains(r##"data-marker="#article-wrapper""##));
    assert!(html.contains(r#"data-target="/""#));
    assert!(html.contains(r#"data-delay="3000""#));
    assert!(!RenderedHtml(&html).has_marker(Marker::ArticleWrapper));
}

#[test]
fn test_not_found_respects_path_prefix() {
    let config = SiteConfig::from_str("[site]\nurl = \"https://example.org/blog\"\n").unwrap();
    let html = render_with(
        LayoutKind::NotFound,
        &PageData::default(),
        &config,
        &FilterState::default(),
    );
    assert!(html.contains(r#"data-target="/blog/""#));
    assert!(html.contains(r#"href="/blog/assets/theme.ccdd2233.css""#));
}

#[test]
fn test_category_index() {
    let site = site();
    let html = render(LayoutKind::CategoryIndex, &PageData::site(&site));
    assert!(html.contains(r#"<div id="category-list""#));
    assert!(html.contains(r#"href="/category/dev""#));
    assert!(html.contains("dev(2)</a>"));
}

#[test]
fn test_tag_index() {
    let site = site();
    let mut data = PageData::site(&site);
    data.tag_options.push(crate::page::TagOption {
        name: "empty".into(),
        count: 0,
        color: "blue".into(),
    });
    let html = render(LayoutKind::TagIndex, &data);

    assert!(html.contains(r#"<div id="tags-list""#));
    assert!(html.contains(r#"href="/tag/C%2B%2B""#));
    assert!(html.contains("notion-orange_background"));
    assert!(html.contains("notion-gray_background"));
    assert!(html.contains(">rust(1)</div>"));
    assert!(html.contains(">empty</div>"));
}

#[test]
fn test_post_list_search_bar_only_with_tag() {
    let site = site();
    let all = PageData::site(&site).with_posts(site.posts.clone());
    assert!(!render(LayoutKind::PostList, &all).contains("<h2 class=\"text-2xl"));

    let tagged = PageData::site(&site)
        .with_posts(site.posts_tagged("rust"))
        .with_tag("rust");
    let html = render(LayoutKind::PostList, &tagged);
    assert!(html.contains(">#rust</h2>"));
    assert_eq!(html.matches("data-nb-post ").count(), 1);
}

#[test]
fn test_filter_key_narrows_lists() {
    let site = site();
    let data = PageData::site(&site).with_posts(site.posts.clone());
    let html = render_with(
        LayoutKind::PostList,
        &data,
        &SiteConfig::default(),
        &FilterState::new("CSS"),
    );
    assert_eq!(html.matches("data-nb-post ").count(), 1);
    assert!(html.contains(r#"value="CSS""#));
    assert!(html.contains("Web notes"));
}

#[test]
fn test_filter_without_match_shows_empty_state() {
    let site = site();
    let data = PageData::site(&site).with_posts(site.posts.clone());
    let html = render_with(
        LayoutKind::Index,
        &data,
        &SiteConfig::default(),
        &FilterState::new("baz"),
    );
    assert!(html.contains("No posts found."));
}

#[test]
fn test_search_highlights_inside_posts_wrapper() {
    let site = site();
    let data = PageData::site(&site)
        .with_posts(site.posts.clone())
        .with_keyword("rust");
    let html = render(LayoutKind::Search, &data);

    assert!(html.contains("Search: rust</h2>"));
    let wrapper = html.find(r#"id="posts-wrapper""#).unwrap();
    let first = html.find(HIGHLIGHT).unwrap();
    assert!(first > wrapper);
    assert!(html.contains(&format!("Hello {HIGHLIGHT}Rust</span>")));
    // attribute values stay intact
    assert!(html.contains(r#"data-nb-search="hello rustfirst stepsrust""#));
}

#[test]
fn test_archive_groups_in_order() {
    let site = site();
    let data = PageData::site(&site).with_archive(site.archive_posts());
    let html = render(LayoutKind::Archive, &data);

    let march = html.find(r#"<div id="2024-03">"#).unwrap();
    let january = html.find(r#"<div id="2024-01">"#).unwrap();
    let undated = html.find(r#"<div id="Undated">"#).unwrap();
    assert!(march < january && january < undated);
    assert!(html.contains("2024-03-02"));
}

#[test]
fn test_pagination_follows_list_style() {
    let site = site();
    let pagination = Pagination::new(site.posts.len(), 2);
    let data = PageData::site(&site)
        .with_posts(pagination.slice(&site.posts).to_vec())
        .with_pagination(pagination, "/");

    let html = render(LayoutKind::Index, &data);
    assert!(html.contains(r#"href="/page/2/" rel="next""#));
    assert!(html.contains("<span>1 / 2</span>"));

    let mut config = SiteConfig::default();
    config.theme.post_list_style = PostListStyle::Scroll;
    let html = render_with(LayoutKind::Index, &data, &config, &FilterState::default());
    assert!(!html.contains("nb-pagination"));
}

#[test]
fn test_custom_widgets() {
    struct Quiet;
    impl Widgets for Quiet {
        fn footer(&self, _ctx: &ThemeContext<'_>, _data: &PageData) -> String {
            "<footer>quiet</footer>".into()
        }
        fn live2d(&self, _ctx: &ThemeContext<'_>) -> String {
            "<canvas id=\"live2d\"></canvas>".into()
        }
    }

    let config = SiteConfig::default();
    let assets = assets();
    let filter = FilterState::default();
    let ctx = ThemeContext::new(&config, &assets, &filter).with_widgets(&Quiet);
    let html = render_page(LayoutKind::NotFound, &PageData::default(), &ctx);

    assert!(html.contains("<footer>quiet</footer>"));
    assert!(html.contains(r#"<canvas id="live2d"></canvas>"#));
}

#[test]
fn test_explicit_toc_is_rendered() {
    let site = site();
    let mut post = post(&site, "web");
    post.toc = Some(vec![
        TocEntry::new("aa-bb", "First", 0),
        TocEntry::new("cc", "Nested", 1),
    ]);
    let html = render(LayoutKind::Slug, &PageData::site(&site).with_post(post));
    assert!(html.contains(r#"data-nb-toc-id="aabb""#));
    assert!(html.contains("margin-left: 12px"));
}
