//! Domain logic for the protein browser.
//!
//! This module contains core policy with no UI types:
//! - Visible range (windowing over the row buffer for virtual scrolling)
//! - Scroll trigger (when a continuation fetch should fire)

pub mod visible_range;
pub mod scroll_trigger;
