//! Table of contents sidebar rendering.

use super::TocEntry;
use crate::utils::html::{class_list, escape, escape_attr};
use std::fmt::Write;

const CONTAINER: &str = "hidden xl:block fixed top-40 w-64 h-full transition-all duration-500 z-10 xl:left-[calc(50%+20rem)]";
const SHOWN: &str = "opacity-100 translate-x-0";
const HIDDEN: &str = "opacity-0 translate-x-10 pointer-events-none";
const LINK: &str = "block transition-all duration-300 text-sm hover:text-black dark:hover:text-white";
const ACTIVE: &str = "text-black dark:text-white font-bold translate-x-1";
const MUTED: &str = "text-gray-400";

/// The table of contents sidebar.
///
/// Visibility only toggles classes: a hidden catalog is faded out and ignores
/// the pointer but stays in the markup, so the scroll listeners attached to it
/// survive the toggle.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub entries: Option<&'a [TocEntry]>,
    pub visible: bool,
    /// Normalized id of the active heading.
    pub active: Option<&'a str>,
    /// Left margin per indent level, in px.
    pub indent_unit: u32,
}

impl<'a> Catalog<'a> {
    pub fn new(entries: Option<&'a [TocEntry]>) -> Self {
        Self {
            entries,
            visible: false,
            active: None,
            indent_unit: 12,
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn active(mut self, active: Option<&'a str>) -> Self {
        self.active = active;
        self
    }

    pub fn indent_unit(mut self, unit: u32) -> Self {
        self.indent_unit = unit;
        self
    }

    /// Left margin in px for an indent level.
    #[inline]
    pub fn indent_px(&self, level: u32) -> u32 {
        level.saturating_mul(self.indent_unit)
    }

    /// Render the sidebar; empty when there are no entries.
    pub fn render(&self) -> String {
        let Some(entries) = self.entries.filter(|e| !e.is_empty()) else {
            return String::new();
        };

        let state = if self.visible { SHOWN } else { HIDDEN };
        let mut html = String::with_capacity(256 + entries.len() * 160);

        let _ = write!(
            html,
            r#"<div data-nb-catalog class="{}"><div class="px-4 border-l border-gray-100 dark:border-gray-800 text-left">"#,
            class_list([CONTAINER, state])
        );
        html.push_str(r#"<div class="text-[10px] uppercase text-gray-400 mb-4 font-bold tracking-widest">Table of Contents</div>"#);
        html.push_str(r#"<div class="overflow-y-auto max-h-[65vh] scroll-hidden"><nav class="space-y-3">"#);

        for entry in entries {
            let id = entry.anchor();
            let is_active = self.active == Some(id.as_str());
            let _ = write!(
                html,
                r##"<a href="#{id}" data-nb-toc-id="{id}" class="{class}" style="margin-left: {margin}px"><span class="truncate block">{text}</span></a>"##,
                id = escape_attr(&id),
                class = class_list([LINK, if is_active { ACTIVE } else { MUTED }]),
                margin = self.indent_px(entry.indent_level),
                text = escape(&entry.text),
            );
        }

        html.push_str("</nav></div></div></div>");
        html
    }
}
