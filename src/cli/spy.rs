//! Spy command: replay a recorded scroll trace through the scroll-spy.
//!
//! A trace lists heading offsets (document coordinates, in order) and a
//! sequence of timestamped scroll positions:
//!
//! ```json
//! {
//!   "headings": [{ "id": "intro", "offset": 120 }, { "id": null, "offset": 900 }],
//!   "events": [{ "at": 0, "scroll": 0 }, { "at": 50, "scroll": 400 }],
//!   "fallback": { "page": "post", "markerPresent": false }
//! }
//! ```
//!
//! Trailing throttle runs and fallback checks fire at their own deadlines,
//! between the recorded events.

use crate::cli::SpyArgs;
use crate::config::{SiteConfig, cfg};
use crate::layout::fallback::FallbackCheck;
use crate::log;
use crate::spy::{DocumentLayout, PageView, ViewEvent};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};
use std::{fs, io};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Trace {
    pub headings: Vec<TraceHeading>,
    #[serde(default)]
    pub events: Vec<ScrollEvent>,
    #[serde(default)]
    pub fallback: Option<TraceFallback>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraceHeading {
    #[serde(default)]
    pub id: Option<String>,
    pub offset: f64,
}

/// Window scrolled to `scroll` px, `at` ms after the page mounted.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScrollEvent {
    pub at: u64,
    pub scroll: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TraceFallback {
    pub page: FallbackPage,
    #[serde(default)]
    pub marker_present: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FallbackPage {
    Post,
    NotFound,
}

/// State of the view after one step of the replay.
#[derive(Debug, Clone, PartialEq)]
pub struct SpyStep {
    pub at_ms: u64,
    pub active: Option<String>,
    pub visible: bool,
    pub redirect: Option<String>,
}

pub fn run_spy(args: &SpyArgs) -> Result<()> {
    let trace = read_trace(&args.trace)?;
    for step in replay(&trace, &cfg()) {
        log!(
            "spy";
            "{:>6}ms  active={}  visible={}{}",
            step.at_ms,
            step.active.as_deref().unwrap_or("-"),
            step.visible,
            step.redirect
                .as_deref()
                .map(|target| format!("  redirect={target}"))
                .unwrap_or_default()
        );
    }
    Ok(())
}

fn read_trace(path: &Path) -> Result<Trace> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read trace from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace '{}'", path.display()))?
    };
    parse_trace(&content)
}

pub fn parse_trace(content: &str) -> Result<Trace> {
    serde_json::from_str(content).context("Invalid scroll trace")
}

/// Replay `trace`, returning one step per scroll event and per timer that
/// changed something.
pub fn replay(trace: &Trace, config: &SiteConfig) -> Vec<SpyStep> {
    let start = Instant::now();
    let layout = DocumentLayout::new(
        trace
            .headings
            .iter()
            .map(|heading| (heading.id.clone(), heading.offset)),
    );
    let mut view = PageView::new(layout, &config.catalog);
    let mut steps = Vec::new();

    if !trace.headings.is_empty() {
        view.mount_catalog(start);
    }

    let marker_present = match &trace.fallback {
        Some(fallback) => {
            let check = match fallback.page {
                FallbackPage::Post => FallbackCheck::missing_post(config),
                FallbackPage::NotFound => FallbackCheck::not_found(config),
            };
            view.schedule_fallback(check, start);
            fallback.marker_present
        }
        None => true,
    };

    let elapsed = |at: Instant| at.saturating_duration_since(start).as_millis() as u64;
    let run_timers = |view: &mut PageView<DocumentLayout>,
                          steps: &mut Vec<SpyStep>,
                          until: Option<Instant>| {
        while let Some(deadline) = view.next_deadline()
            && until.is_none_or(|until| deadline <= until)
        {
            let events = view.tick(deadline, &marker_present);
            if !events.is_empty() {
                steps.push(snapshot(view, elapsed(deadline), &events));
            }
        }
    };

    for event in &trace.events {
        let now = start + Duration::from_millis(event.at);
        run_timers(&mut view, &mut steps, Some(now));
        let events = view.scroll(event.scroll, now);
        steps.push(snapshot(&view, event.at, &events));
    }
    run_timers(&mut view, &mut steps, None);

    view.teardown();
    steps
}

fn snapshot(view: &PageView<DocumentLayout>, at_ms: u64, events: &[ViewEvent]) -> SpyStep {
    let redirect = events.iter().find_map(|event| match event {
        ViewEvent::Redirect(redirect) => Some(redirect.target.clone()),
        _ => None,
    });
    SpyStep {
        at_ms,
        active: view.active().map(str::to_owned),
        visible: view.visible(),
        redirect,
    }
}
