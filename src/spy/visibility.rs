//! Show-on-scroll flag for the table of contents.

/// `true` once the page is scrolled past `offset`.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityGate {
    offset: f64,
    visible: bool,
}

impl VisibilityGate {
    pub const DEFAULT_OFFSET: f64 = 400.0;

    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            visible: false,
        }
    }

    /// Record a scroll position and return the new flag.
    #[inline]
    pub fn observe(&mut self, scroll_y: f64) -> bool {
        self.visible = scroll_y > self.offset;
        self.visible
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OFFSET)
    }
}
