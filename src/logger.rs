//! Terminal output: prefixed log lines and the build progress line.
//!
//! ```ignore
//! log!("build"; "rendered {} pages", count);
//! debug!("config"; "no config found");   // only with --verbose
//!
//! let progress = ProgressLine::new(&[("posts", 42), ("lists", 9)]);
//! progress.inc("posts");
//! progress.finish();
//! ```
//!
//! While a [`ProgressLine`] is live, log lines are printed above it and the
//! progress line is redrawn underneath.

use crossterm::{
    cursor, queue,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use parking_lot::Mutex;
use std::{
    io::{self, Write},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Text of the live progress line, if any.
static PROGRESS: Mutex<Option<String>> = Mutex::new(None);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Log a message with a colored module prefix.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like [`log!`], but only with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

pub fn log(module: &str, message: &str) {
    let progress = PROGRESS.lock();
    let mut out = io::stdout().lock();

    if progress.is_some() {
        queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
    }
    writeln!(out, "{} {message}", prefix(module)).ok();
    if let Some(line) = progress.as_deref() {
        write!(out, "{line}").ok();
    }
    out.flush().ok();
}

fn prefix_style(module: &str) -> Style {
    let style = Style::new().bold();
    match module.to_ascii_lowercase().as_str() {
        "build" => style.bright_blue(),
        "spy" => style.bright_green(),
        "error" => style.bright_red(),
        _ => style.bright_yellow(),
    }
}

fn prefix(module: &str) -> String {
    let style = prefix_style(module);
    format!("[{module}]")
        .if_supports_color(Stream::Stdout, |text| text.style(style))
        .to_string()
}

// ============================================================================
// progress
// ============================================================================

/// One line of named counters, redrawn in place:
/// `[build] posts(42/69) lists(5/10) taxonomy(12/30)`.
///
/// Counters with a zero total are left out.
pub struct ProgressLine {
    counters: Vec<(&'static str, usize, AtomicUsize)>,
}

impl ProgressLine {
    pub fn new(items: &[(&'static str, usize)]) -> Self {
        let progress = Self {
            counters: items
                .iter()
                .filter(|(_, total)| *total > 0)
                .map(|&(name, total)| (name, total, AtomicUsize::new(0)))
                .collect(),
        };
        progress.redraw(false);
        progress
    }

    /// Bump the counter called `name`. Unknown names are ignored.
    pub fn inc(&self, name: &str) {
        if let Some((_, _, done)) = self.counters.iter().find(|(n, ..)| *n == name) {
            done.fetch_add(1, Ordering::Relaxed);
            self.redraw(false);
        }
    }

    /// Print the final counts and release the line.
    pub fn finish(self) {
        self.redraw(true);
    }

    fn line(&self) -> String {
        let counts: Vec<_> = self
            .counters
            .iter()
            .map(|(name, total, done)| format!("{name}({}/{total})", done.load(Ordering::Relaxed)))
            .collect();
        format!("{} {}", prefix("build"), counts.join(" "))
    }

    fn redraw(&self, last: bool) {
        // workers skip the redraw while another thread is drawing
        let Some(mut progress) = (if last {
            Some(PROGRESS.lock())
        } else {
            PROGRESS.try_lock()
        }) else {
            return;
        };

        let line = self.line();
        let mut out = io::stdout().lock();
        queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
        if last {
            writeln!(out, "{line}").ok();
            *progress = None;
        } else {
            write!(out, "{line}").ok();
            *progress = Some(line);
        }
        out.flush().ok();
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        let mut progress = PROGRESS.lock();
        if progress.take().is_some() {
            let mut out = io::stdout().lock();
            queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
            out.flush().ok();
        }
    }
}
