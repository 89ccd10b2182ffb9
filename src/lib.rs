pub mod protocol;
pub mod query;
pub mod cursor;
pub mod source;
pub mod client;
pub mod sample;

// Export the wire model and row projection
pub use protocol::{ProteinEntry, ProteinRow, SearchResponse};

// Export query construction
pub use query::{next_sort, QueryState, SortColumn, SortDir, SortSpec, DEFAULT_BASE_URL};

// Export cursor extraction
pub use cursor::next_page_link;

// Export the page source seam and its implementations
pub use source::{Page, PageSource};
pub use client::RestClient;
pub use sample::SampleSource;
