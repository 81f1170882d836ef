//! Windowing math for the lazily rendered recipe list
//!
//! The list only materializes the cards inside a window of indices: the rows
//! intersecting the visible area plus `overscan` rows on each side. Everything
//! outside the window is represented by leading and trailing spacers so that
//! the scroll geometry matches a fully rendered list.

use std::ops::Range;

/// Default number of rows kept alive above and below the visible area
pub const DEFAULT_OVERSCAN: usize = 2;

/// Fixed-row-height viewport over a list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    item_height: f64,
    viewport_height: f64,
    overscan: usize,
}

impl Viewport {
    /// Create a viewport for rows of `item_height` pixels shown in a
    /// container `viewport_height` pixels tall.
    ///
    /// Non-finite or non-positive heights are clamped: rows are at least one
    /// pixel tall and the container is never negative.
    pub fn new(item_height: f64, viewport_height: f64) -> Self {
        Self {
            item_height: sanitize(item_height).max(1.0),
            viewport_height: sanitize(viewport_height),
            overscan: DEFAULT_OVERSCAN,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Same viewport with a new container height (e.g. after a resize)
    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = sanitize(viewport_height);
        self
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Rows that can intersect the container at any scroll position
    fn rows_on_screen(&self) -> usize {
        ((self.viewport_height / self.item_height).ceil() as usize).saturating_add(1)
    }

    /// Upper bound on the window length, independent of the list length
    pub fn max_window_len(&self) -> usize {
        self.rows_on_screen()
            .saturating_add(self.overscan.saturating_mul(2))
    }

    /// Indices `[start, end)` to materialize at `scroll_offset` for a list of
    /// `len` rows.
    ///
    /// Offsets past the end clamp to the last window; negative or non-finite
    /// offsets clamp to the top.
    pub fn visible_range(&self, scroll_offset: f64, len: usize) -> Range<usize> {
        if len == 0 {
            return 0..0;
        }

        let rows = self.rows_on_screen();
        let first = (sanitize(scroll_offset) / self.item_height).floor() as usize;
        let first = first.min(len.saturating_sub(rows));

        let start = first.saturating_sub(self.overscan);
        let end = first
            .saturating_add(rows.saturating_add(self.overscan))
            .min(len);
        start..end
    }

    /// Height of the spacer standing in for rows before the window
    pub fn leading_space(&self, window: &Range<usize>) -> f64 {
        window.start as f64 * self.item_height
    }

    /// Height of the spacer standing in for rows after the window
    pub fn trailing_space(&self, window: &Range<usize>, len: usize) -> f64 {
        len.saturating_sub(window.end) as f64 * self.item_height
    }

    /// Full scroll height of a list with `len` rows
    pub fn content_height(&self, len: usize) -> f64 {
        len as f64 * self.item_height
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
