//! Markdown articles.
//!
//! Renders a post body to HTML and extracts its table of contents in the same
//! pass. Every heading carries the scroll-spy contract:
//!
//! ```text
//! <h2 id="gettingstarted" data-id="gettingstarted" class="notion-h notion-h2">
//! ```
//!
//! Anchors come from an explicit `{#id}` or the slugified heading text.
//! Anchors are normalized first, then repeats get `1`, `2`, ... suffixes until
//! the id is unused.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::toc::{TocEntry, normalize_id, normalize_levels};
use crate::utils::html::escape_attr;
use crate::utils::slug::slugify;

/// Anchor used for headings with no alphanumeric text.
const FALLBACK_ANCHOR: &str = "section";

/// A rendered article body and its table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub html: String,
    pub toc: Vec<TocEntry>,
}

/// Heading found while scanning the event stream.
struct ScannedHeading {
    /// Index of the `Start(Heading)` event
    start: usize,
    /// Index of the matching `End(Heading)` event
    end: usize,
    level: HeadingLevel,
    explicit_id: Option<String>,
    classes: Vec<String>,
    text: String,
}

/// Render `markdown` to HTML with heading markers and collect its TOC.
pub fn render_article(markdown: &str) -> Article {
    let mut events: Vec<Event<'_>> = Parser::new_ext(markdown, options()).collect();
    let headings = scan_headings(&events);

    let mut ids = AnchorAllocator::default();
    let anchors: Vec<String> = headings
        .iter()
        .map(|h| {
            let base = h.explicit_id.clone().unwrap_or_else(|| slugify(&h.text));
            ids.allocate(&base)
        })
        .collect();

    let depths: Vec<u32> = headings.iter().map(|h| h.level as u32 - 1).collect();
    let levels = normalize_levels(&depths);

    for (heading, anchor) in headings.iter().zip(&anchors) {
        events[heading.start] = Event::Html(open_tag(heading, anchor).into());
        events[heading.end] = Event::Html(format!("</{}>", heading.level).into());
    }

    let mut body = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut body, events.into_iter());

    let toc = headings
        .into_iter()
        .zip(anchors)
        .zip(levels)
        .map(|((heading, anchor), level)| TocEntry::new(anchor, heading.text.trim(), level))
        .collect();

    Article { html: body, toc }
}

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}

fn scan_headings(events: &[Event<'_>]) -> Vec<ScannedHeading> {
    let mut headings = Vec::new();
    let mut current: Option<ScannedHeading> = None;

    for (index, event) in events.iter().enumerate() {
        match event {
            Event::Start(Tag::Heading {
                level, id, classes, ..
            }) => {
                current = Some(ScannedHeading {
                    start: index,
                    end: index,
                    level: *level,
                    explicit_id: id.as_ref().map(|id| id.to_string()),
                    classes: classes.iter().map(|c| c.to_string()).collect(),
                    text: String::new(),
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push_str(text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(mut heading) = current.take() {
                    heading.end = index;
                    headings.push(heading);
                }
            }
            _ => {}
        }
    }

    headings
}

fn open_tag(heading: &ScannedHeading, anchor: &str) -> String {
    let anchor = escape_attr(anchor);
    let mut class = format!("notion-h notion-{}", heading.level);
    for extra in &heading.classes {
        class.push(' ');
        class.push_str(&escape_attr(extra));
    }
    format!(
        r#"<{level} id="{anchor}" data-id="{anchor}" class="{class}">"#,
        level = heading.level
    )
}

/// Hands out unique, normalized anchors within one article.
#[derive(Debug, Default)]
struct AnchorAllocator {
    taken: FxHashSet<String>,
    /// Next suffix to try per normalized base
    next_suffix: FxHashMap<String, usize>,
}

impl AnchorAllocator {
    fn allocate(&mut self, base: &str) -> String {
        let mut base = normalize_id(base);
        if base.is_empty() {
            base = FALLBACK_ANCHOR.to_owned();
        }

        let anchor = if self.taken.contains(&base) {
            let suffix = self.next_suffix.entry(base.clone()).or_insert(1);
            loop {
                let candidate = format!("{base}{suffix}");
                *suffix += 1;
                if !self.taken.contains(&candidate) {
                    break candidate;
                }
            }
        } else {
            base
        };
        self.taken.insert(anchor.clone());
        anchor
    }
}
