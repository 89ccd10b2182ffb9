//! Centralized application state for the protein browser.
//!
//! Composes focused state components that each manage one aspect of the
//! application. Each component keeps its invariants local behind
//! intent-revealing methods; this struct only wires them together and
//! hosts the coordination helpers that touch several of them at once.

use crate::app::session::{LocalSession, SessionProvider};
use crate::state::{LayoutState, QuerySession, ResultsState, ScrollState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Active query, continuation link, and generation
    pub session: QuerySession,

    /// The growing row buffer
    pub results: ResultsState,

    /// Scroll position of the results table
    pub scroll: ScrollState,

    /// Table geometry and input buffers
    pub layout: LayoutState,

    /// Identity signal from the auth collaborator
    pub auth: Box<dyn SessionProvider>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates application state for the given base endpoint.
    pub fn new(base_url: &str) -> Self {
        Self {
            session: QuerySession::new(base_url),
            results: ResultsState::new(),
            scroll: ScrollState::new(),
            layout: LayoutState::new(),
            auth: Box::new(LocalSession::new()),
            error_message: None,
        }
    }

    /// Creates application state with column widths restored from storage.
    pub fn with_layout(base_url: &str, layout: LayoutState) -> Self {
        Self {
            layout,
            ..Self::new(base_url)
        }
    }
}
