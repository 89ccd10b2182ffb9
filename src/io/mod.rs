//! I/O modules for background page fetching.

pub mod page_loader;

pub use page_loader::{FetchTag, PageLoader};
