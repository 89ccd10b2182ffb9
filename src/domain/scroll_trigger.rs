//! Continuation prefetch policy.
//!
//! Decides, from the scroll geometry reported by the results table, whether
//! the next page should be fetched. The lookahead margin hides fetch
//! latency: the fetch fires while the user still has up to two viewports of
//! unread rows below.

/// Prefetch margin, in viewport heights.
pub const LOOKAHEAD_FACTOR: f32 = 2.0;

/// Viewport geometry of the results table for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollGeometry {
    /// Vertical scroll offset from the top of the content
    pub scroll_offset: f32,
    /// Height of the visible viewport
    pub visible_height: f32,
    /// Total height of the scrollable content
    pub total_content_height: f32,
}

impl ScrollGeometry {
    /// True when the remaining content below the viewport top is within the
    /// lookahead margin.
    pub fn near_bottom(&self) -> bool {
        self.total_content_height - self.scroll_offset <= LOOKAHEAD_FACTOR * self.visible_height
    }
}

/// Fires the continuation fetch iff the viewport is near the bottom, no
/// fetch is in flight, and a continuation link exists. Repeated scroll
/// events while a fetch is pending are no-ops.
pub fn should_fetch_next(geometry: ScrollGeometry, loading: bool, has_more: bool) -> bool {
    if loading || !has_more {
        return false;
    }
    geometry.near_bottom()
}
