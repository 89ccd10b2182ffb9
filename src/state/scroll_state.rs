//! Vertical scroll position shared across frames.
//!
//! The visible row window for a frame is computed from the scroll offset
//! reported by the previous frame's scroll area output, so the offset has
//! to live outside the render closure.

/// State related to the results table's vertical scroll position.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    scroll_y: f32,
    pending_reset: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            scroll_y: 0.0,
            pending_reset: false,
        }
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn set_scroll_y(&mut self, y: f32) {
        self.scroll_y = y.max(0.0);
    }

    /// Requests a jump back to the top, applied by the results table on its
    /// next frame. Used when a new query replaces the buffer.
    pub fn reset_to_top(&mut self) {
        self.scroll_y = 0.0;
        self.pending_reset = true;
    }

    /// Consumes a pending jump-to-top request.
    pub fn take_pending_reset(&mut self) -> bool {
        std::mem::take(&mut self.pending_reset)
    }
}
