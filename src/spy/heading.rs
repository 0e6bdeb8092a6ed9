//! Heading geometry.

/// A heading as seen by the scroll-spy.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingPosition {
    /// Normalized id from the heading's `data-id`; `None` when the attribute
    /// is missing.
    pub id: Option<String>,
    /// Distance of the heading's top edge from the viewport top, in px.
    pub top: f64,
}

impl HeadingPosition {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self {
            id: Some(id.into()),
            top,
        }
    }
}

/// Source of heading positions in document order.
///
/// Slots that are not renderable elements are reported as `None`; the
/// scroll-spy skips them.
pub trait HeadingPositionProvider {
    fn headings_in_order(&self) -> Vec<Option<HeadingPosition>>;

    /// Viewport scrolled to `scroll_y`. Providers that read live geometry
    /// ignore this.
    fn scrolled(&mut self, _scroll_y: f64) {}
}

impl HeadingPositionProvider for Vec<Option<HeadingPosition>> {
    fn headings_in_order(&self) -> Vec<Option<HeadingPosition>> {
        self.clone()
    }
}

/// Headings at fixed document offsets, viewed through a scrolled viewport.
///
/// `top = document_offset - scroll_y`.
#[derive(Debug, Clone, Default)]
pub struct DocumentLayout {
    headings: Vec<(Option<String>, f64)>,
    scroll_y: f64,
}

impl DocumentLayout {
    pub fn new(headings: impl IntoIterator<Item = (Option<String>, f64)>) -> Self {
        Self {
            headings: headings.into_iter().collect(),
            scroll_y: 0.0,
        }
    }

    #[inline]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.headings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }
}

impl HeadingPositionProvider for DocumentLayout {
    fn headings_in_order(&self) -> Vec<Option<HeadingPosition>> {
        self.headings
            .iter()
            .map(|(id, offset)| {
                Some(HeadingPosition {
                    id: id.clone(),
                    top: offset - self.scroll_y,
                })
            })
            .collect()
    }

    fn scrolled(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }
}
