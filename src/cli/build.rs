//! Site building.
//!
//! Build phases:
//! - **Init** - clean and create the output directory
//! - **Load** - read site data, render article bodies (parallel)
//! - **Assets** - write content-hashed `catalog.js` and `theme.css`
//! - **Plan** - one `PlannedPage` per route
//! - **Render** - layouts to HTML files (parallel)

use crate::{
    config::{PostListStyle, SiteConfig},
    embed::{self, AssetNames},
    layout::{LayoutKind, ThemeContext, category_path, render_page, tag_path},
    log,
    logger::ProgressLine,
    page::{FilterState, PageData, Pagination, Post, SiteData},
    utils::{plural::plural_count, slug::path_segment},
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Progress counter a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageGroup {
    Posts,
    Lists,
    Taxonomy,
}

impl PageGroup {
    const fn label(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Lists => "lists",
            Self::Taxonomy => "taxonomy",
        }
    }
}

/// One page to render.
#[derive(Debug)]
struct PlannedPage {
    kind: LayoutKind,
    group: PageGroup,
    /// Output file, relative to the output directory
    file: PathBuf,
    data: PageData,
}

/// What a build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub posts: usize,
    pub assets: AssetNames,
}

/// Build the entire site.
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildSummary> {
    let output = init_output(config)?;

    let data_path = config.data_path();
    let mut site = SiteData::load(&data_path)
        .with_context(|| format!("Failed to load site data '{}'", data_path.display()))?;
    site.prepare();
    crate::debug!("build"; "loaded {}", plural_count(site.posts.len(), "post"));

    let assets = embed::write_embedded_assets(config, &config.assets_dir())?;

    let pages = plan_pages(config, &site);
    let progress = (!quiet).then(|| create_progress(&pages));

    pages
        .par_iter()
        .try_for_each(|page| -> Result<()> {
            write_page(config, &assets, &output, page)?;
            if let Some(progress) = &progress {
                progress.inc(page.group.label());
            }
            Ok(())
        })?;

    if let Some(progress) = progress {
        progress.finish();
    }

    if !quiet {
        log!(
            "build"; "rendered {} into {}",
            plural_count(pages.len(), "page"),
            output.display()
        );
    }

    Ok(BuildSummary {
        pages: pages.len(),
        posts: site.posts.len(),
        assets,
    })
}

fn init_output(config: &SiteConfig) -> Result<PathBuf> {
    let output = config.output_dir();
    if config.build.clean && output.exists() {
        fs::remove_dir_all(&output)
            .with_context(|| format!("Failed to clean output directory '{}'", output.display()))?;
    }
    fs::create_dir_all(&output)
        .with_context(|| format!("Failed to create output directory '{}'", output.display()))?;
    Ok(output)
}

fn create_progress(pages: &[PlannedPage]) -> ProgressLine {
    let count = |group| pages.iter().filter(|page| page.group == group).count();
    ProgressLine::new(&[
        ("posts", count(PageGroup::Posts)),
        ("lists", count(PageGroup::Lists)),
        ("taxonomy", count(PageGroup::Taxonomy)),
    ])
}

fn write_page(
    config: &SiteConfig,
    assets: &AssetNames,
    output: &Path,
    page: &PlannedPage,
) -> Result<()> {
    let filter = FilterState::default();
    let ctx = ThemeContext::new(config, assets, &filter);
    let html = render_page(page.kind, &page.data, &ctx);

    let path = output.join(&page.file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&path, html).with_context(|| format!("Failed to write '{}'", path.display()))
}

// ============================================================================
// Planning
// ============================================================================

fn plan_pages(config: &SiteConfig, site: &SiteData) -> Vec<PlannedPage> {
    let base = PageData::site(site);
    let mut pages = Vec::new();

    // home and its pagination
    pages.extend(list_pages(config, &base, &site.posts, &[], "/", |data| data));

    for post in &site.posts {
        pages.push(PlannedPage {
            kind: LayoutKind::Slug,
            group: PageGroup::Posts,
            file: page_file(&[&post.slug]),
            data: base.clone().with_post(post.clone()),
        });
    }

    pages.push(PlannedPage {
        kind: LayoutKind::Archive,
        group: PageGroup::Lists,
        file: page_file(&["archive"]),
        data: base.clone().with_archive(site.archive_posts()),
    });
    pages.push(PlannedPage {
        kind: LayoutKind::Search,
        group: PageGroup::Lists,
        file: page_file(&["search"]),
        data: base.clone().with_posts(site.posts.clone()),
    });
    pages.push(PlannedPage {
        kind: LayoutKind::NotFound,
        group: PageGroup::Lists,
        file: PathBuf::from("404.html"),
        data: base.clone(),
    });

    pages.push(PlannedPage {
        kind: LayoutKind::CategoryIndex,
        group: PageGroup::Taxonomy,
        file: page_file(&["category"]),
        data: base.clone(),
    });
    for option in &base.category_options {
        let posts = site.posts_in_category(&option.name);
        let name = option.name.clone();
        let segment = path_segment(&option.name);
        pages.extend(
            list_pages(
                config,
                &base,
                &posts,
                &["category", &*segment],
                &category_path(&option.name),
                move |data| data.with_category(name.clone()),
            )
            .map(PlannedPage::taxonomy),
        );
    }

    pages.push(PlannedPage {
        kind: LayoutKind::TagIndex,
        group: PageGroup::Taxonomy,
        file: page_file(&["tag"]),
        data: base.clone(),
    });
    for option in &base.tag_options {
        let posts = site.posts_tagged(&option.name);
        let name = option.name.clone();
        let segment = path_segment(&option.name);
        pages.extend(
            list_pages(
                config,
                &base,
                &posts,
                &["tag", &*segment],
                &tag_path(&option.name),
                move |data| data.with_tag(name.clone()),
            )
            .map(PlannedPage::taxonomy),
        );
    }

    pages
}

impl PlannedPage {
    fn taxonomy(mut self) -> Self {
        self.group = PageGroup::Taxonomy;
        self
    }
}

/// Pages of one post list. The first page of the home list uses the `index`
/// layout, every other list page `postList`.
fn list_pages<'a>(
    config: &SiteConfig,
    base: &'a PageData,
    posts: &'a [Post],
    segments: &'a [&'a str],
    route: &str,
    decorate: impl Fn(PageData) -> PageData + 'a,
) -> impl Iterator<Item = PlannedPage> + 'a {
    let per_page = match config.theme.post_list_style {
        PostListStyle::Page => config.theme.posts_per_page,
        PostListStyle::Scroll => posts.len(),
    };
    let is_home = segments.is_empty();
    let route = route.to_owned();

    Pagination::new(posts.len(), per_page)
        .pages()
        .map(move |pagination| {
            let kind = if is_home && pagination.page == 1 {
                LayoutKind::Index
            } else {
                LayoutKind::PostList
            };

            let page_number = pagination.page.to_string();
            let mut file_segments = segments.to_vec();
            if pagination.page > 1 {
                file_segments.extend(["page", page_number.as_str()]);
            }

            PlannedPage {
                kind,
                group: PageGroup::Lists,
                file: page_file(&file_segments),
                data: decorate(
                    base.clone()
                        .with_posts(pagination.slice(posts).to_vec())
                        .with_pagination(pagination, route.clone()),
                ),
            }
        })
}

/// `["tag", "rust"]` → `tag/rust/index.html`; `[]` → `index.html`.
fn page_file(segments: &[&str]) -> PathBuf {
    let mut file: PathBuf = segments.iter().collect();
    file.push("index.html");
    file
}
