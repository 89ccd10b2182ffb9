//! State management modules for the protein browser.
//!
//! This module contains state-only logic (no UI concerns):
//! - Query session (search text, active sort, continuation link, generation)
//! - Results state (the growing row buffer)
//! - Scroll state (vertical scroll position shared across frames)
//! - Layout state (column widths, input buffers)

mod query_state;
mod results_state;
mod scroll_state;
mod layout_state;

pub use query_state::QuerySession;
pub use results_state::ResultsState;
pub use scroll_state::ScrollState;
pub use layout_state::{LayoutState, DATA_COLUMNS};
