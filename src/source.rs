//! The seam between the pagination state machine and a page backend.

use crate::protocol::ProteinRow;

/// One fetched page: the rows in server order plus the continuation link
/// for the following page. An empty `next_link` means end of pagination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub rows: Vec<ProteinRow>,
    pub next_link: String,
}

/// Trait for fetching one page of results for a fully-formed request URL.
///
/// Implementations: [`crate::RestClient`] against the live endpoint,
/// [`crate::SampleSource`] for offline/demo use, and scripted sources in
/// tests. `Send + Sync` so a shared source can be handed to background
/// fetch threads.
pub trait PageSource: Send + Sync {
    /// Fetches the page addressed by `url`.
    ///
    /// A successful result carries the rows in server order and the next
    /// continuation link (possibly empty). Network failures and malformed
    /// responses surface as errors; a missing continuation link does not.
    fn fetch_page(&self, url: &str) -> anyhow::Result<Page>;
}
