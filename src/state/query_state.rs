//! Query session state: the single source of truth for "what is currently
//! being browsed".
//!
//! Owns the query inputs, the server-provided continuation link, and a
//! generation counter identifying the query. Every fetch is tagged with the
//! generation that was current when it was issued; a response whose tag no
//! longer matches is discarded instead of merged.

use protview::query::{next_sort, QueryState, SortColumn, SortSpec};

/// State related to the active query and its pagination.
///
/// Responsibilities:
/// - Applying the SEARCH and SORT transitions
/// - Tracking the continuation link returned by the last applied fetch
/// - Identifying the query via a monotonically increasing generation
pub struct QuerySession {
    query: QueryState,
    next_link: String,
    generation: u64,
}

impl QuerySession {
    /// Creates a session with an empty match-all query against `base`.
    pub fn new(base: &str) -> Self {
        Self {
            query: QueryState::new(base),
            next_link: String::new(),
            generation: 0,
        }
    }

    // ===== Queries =====

    /// Identity of the current query; bumped by every SEARCH/SORT.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn search_text(&self) -> &str {
        self.query.search()
    }

    pub fn active_sort(&self) -> Option<SortSpec> {
        self.query.sort()
    }

    /// Continuation link from the last applied fetch; empty means no
    /// further page is available.
    pub fn next_link(&self) -> &str {
        &self.next_link
    }

    pub fn has_more(&self) -> bool {
        !self.next_link.is_empty()
    }

    // ===== Transitions =====

    /// SEARCH transition: new search text, sort cleared, pagination
    /// restarted. Returns the first-page URL for the new query.
    pub fn submit_search(&mut self, text: &str) -> String {
        self.query.apply_search(text);
        self.start_new_generation()
    }

    /// SORT transition for a click on `column`: advances the per-column
    /// none -> asc -> desc -> none cycle, preserving the search clause,
    /// and restarts pagination. Returns the first-page URL.
    pub fn click_sort(&mut self, column: SortColumn) -> String {
        let next = next_sort(self.query.sort(), column);
        self.query.apply_sort(column, next.map(|spec| spec.dir));
        self.start_new_generation()
    }

    /// LINK transition: records the continuation link parsed from an
    /// applied response. Called only for responses of the current
    /// generation.
    pub fn set_next_link(&mut self, link: String) {
        self.next_link = link;
    }

    fn start_new_generation(&mut self) -> String {
        self.generation += 1;
        self.next_link.clear();
        self.query.request_url()
    }
}
