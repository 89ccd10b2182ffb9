//! Application-level coordination and workflow management.
//!
//! Handles the high-level flows: search submits, sort clicks, scroll-driven
//! continuation fetches, and applying completed fetches to the state —
//! including the staleness guard that keeps late responses of superseded
//! queries out of the buffer.

use crate::app::AppState;
use crate::domain::scroll_trigger::{self, ScrollGeometry};
use crate::io::{FetchTag, PageLoader};
use eframe::egui;
use protview::{PageSource, SortColumn};
use std::sync::Arc;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Applies the SEARCH transition and issues the first-page fetch for
    /// the new query. Supersedes any fetch still in flight.
    pub fn submit_search(
        state: &mut AppState,
        loader: &mut PageLoader,
        source: &Arc<dyn PageSource>,
        ctx: &egui::Context,
        text: &str,
    ) {
        let url = state.session.submit_search(text);
        log::debug!("search submitted, requesting {url}");
        Self::start_first_page(state, loader, source, ctx, url);
    }

    /// Applies the SORT transition for a header click and issues the
    /// first-page fetch for the re-sorted query.
    pub fn click_sort(
        state: &mut AppState,
        loader: &mut PageLoader,
        source: &Arc<dyn PageSource>,
        ctx: &egui::Context,
        column: SortColumn,
    ) {
        let url = state.session.click_sort(column);
        log::debug!("sort changed, requesting {url}");
        Self::start_first_page(state, loader, source, ctx, url);
    }

    fn start_first_page(
        state: &mut AppState,
        loader: &mut PageLoader,
        source: &Arc<dyn PageSource>,
        ctx: &egui::Context,
        url: String,
    ) {
        loader.start_fetch(
            Arc::clone(source),
            url,
            FetchTag {
                generation: state.session.generation(),
                first_page: true,
            },
            ctx,
        );
    }

    /// Issues a continuation fetch when the scroll position warrants one.
    ///
    /// Gated by the loading flag and the continuation link; repeated calls
    /// while a fetch is pending or after the last page are no-ops.
    pub fn handle_scroll(
        state: &mut AppState,
        loader: &mut PageLoader,
        source: &Arc<dyn PageSource>,
        ctx: &egui::Context,
        geometry: ScrollGeometry,
    ) {
        if !scroll_trigger::should_fetch_next(geometry, loader.is_loading(), state.session.has_more()) {
            return;
        }

        let url = state.session.next_link().to_string();
        log::debug!("continuation triggered, requesting {url}");
        loader.start_fetch(
            Arc::clone(source),
            url,
            FetchTag {
                generation: state.session.generation(),
                first_page: false,
            },
            ctx,
        );
    }

    /// Checks for a completed fetch and applies it to the state.
    ///
    /// Called once per frame, before input handling. Returns true if a
    /// completion was consumed (applied or discarded).
    ///
    /// A completion tagged with a generation other than the session's
    /// current one is stale — its query was superseded while the fetch was
    /// in flight — and is discarded wholesale: neither the buffer nor the
    /// continuation link may be updated from a mismatched response.
    pub fn check_fetch_completion(state: &mut AppState, loader: &mut PageLoader) -> bool {
        let Some((tag, result)) = loader.check_completion() else {
            return false;
        };

        if tag.generation != state.session.generation() {
            log::debug!(
                "discarding stale page of generation {} (current is {})",
                tag.generation,
                state.session.generation()
            );
            return true;
        }

        match result {
            Ok(page) => {
                if tag.first_page {
                    state.results.replace(page.rows);
                    state.scroll.reset_to_top();
                } else {
                    state.results.append(page.rows);
                }
                // Cursor and rows come from the same response.
                state.session.set_next_link(page.next_link);
                state.error_message = None;
            }
            Err(message) => {
                // Fail-clear: empty buffer, no retry; the user recovers by
                // searching or scrolling again.
                log::error!("page fetch failed: {message}");
                state.results.clear();
                state.error_message = Some(format!("Failed to load results: {message}"));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use protview::{Page, ProteinRow};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc::{channel, Receiver, Sender};
    use std::sync::Mutex;
    use std::thread;
    use std::time::{Duration, Instant};

    fn row(accession: &str) -> ProteinRow {
        ProteinRow {
            accession: accession.to_string(),
            entry_name: String::new(),
            genes: Vec::new(),
            organism: String::new(),
            location: None,
            length: None,
        }
    }

    fn page(accessions: &[&str], next_link: &str) -> Page {
        Page {
            rows: accessions.iter().map(|a| row(a)).collect(),
            next_link: next_link.to_string(),
        }
    }

    fn near_bottom() -> ScrollGeometry {
        ScrollGeometry {
            scroll_offset: 0.0,
            visible_height: 600.0,
            total_content_height: 100.0,
        }
    }

    /// Serves scripted pages in order, counting fetches.
    struct ScriptedSource {
        pages: Mutex<VecDeque<Page>>,
        fetches: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(pages: Vec<Page>) -> Arc<Self> {
            Arc::new(Self {
                pages: Mutex::new(pages.into()),
                fetches: AtomicUsize::new(0),
            })
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    impl PageSource for ScriptedSource {
        fn fetch_page(&self, url: &str) -> anyhow::Result<Page> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            match self.pages.lock().unwrap().pop_front() {
                Some(page) => Ok(page),
                None => bail!("unexpected fetch of {url}"),
            }
        }
    }

    /// Fetches for the `old` query block until released; every other fetch
    /// answers immediately.
    struct GatedQuerySource {
        gate: Mutex<Option<Receiver<()>>>,
        blocked_page: Page,
        ready_page: Page,
    }

    impl GatedQuerySource {
        fn new(blocked_page: Page, ready_page: Page) -> (Arc<Self>, Sender<()>) {
            let (sender, receiver) = channel();
            (
                Arc::new(Self {
                    gate: Mutex::new(Some(receiver)),
                    blocked_page,
                    ready_page,
                }),
                sender,
            )
        }
    }

    impl PageSource for GatedQuerySource {
        fn fetch_page(&self, url: &str) -> anyhow::Result<Page> {
            if url.contains("query=(old)") {
                if let Some(receiver) = self.gate.lock().unwrap().take() {
                    receiver.recv().ok();
                }
                Ok(self.blocked_page.clone())
            } else {
                Ok(self.ready_page.clone())
            }
        }
    }

    struct FailingSource;

    impl PageSource for FailingSource {
        fn fetch_page(&self, _url: &str) -> anyhow::Result<Page> {
            bail!("connection refused")
        }
    }

    fn apply_next_completion(state: &mut AppState, loader: &mut PageLoader) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if ApplicationCoordinator::check_fetch_completion(state, loader) {
                return;
            }
            assert!(Instant::now() < deadline, "fetch did not complete in time");
            thread::sleep(Duration::from_millis(1));
        }
    }

    fn accessions(state: &AppState) -> Vec<&str> {
        state
            .results
            .rows()
            .iter()
            .map(|row| row.accession.as_str())
            .collect()
    }

    #[test]
    fn search_then_scroll_walks_the_continuation_chain() {
        let ctx = egui::Context::default();
        let mut state = AppState::new("sample:");
        let mut loader = PageLoader::new();
        let scripted = ScriptedSource::new(vec![
            page(&["r1", "r2"], "sample:/search?&query=(kinase)&cursor=2"),
            page(&["r3"], ""),
        ]);
        let source: Arc<dyn PageSource> = scripted.clone();

        ApplicationCoordinator::submit_search(&mut state, &mut loader, &source, &ctx, "kinase");
        apply_next_completion(&mut state, &mut loader);
        assert_eq!(accessions(&state), ["r1", "r2"]);
        assert!(state.session.has_more());

        ApplicationCoordinator::handle_scroll(&mut state, &mut loader, &source, &ctx, near_bottom());
        apply_next_completion(&mut state, &mut loader);
        assert_eq!(accessions(&state), ["r1", "r2", "r3"]);
        assert!(!state.session.has_more());

        // Cursor is spent: further scrolling never fetches again.
        ApplicationCoordinator::handle_scroll(&mut state, &mut loader, &source, &ctx, near_bottom());
        assert!(!loader.is_loading());
        assert_eq!(scripted.fetch_count(), 2);
    }

    #[test]
    fn scroll_while_loading_is_a_no_op() {
        let ctx = egui::Context::default();
        let mut state = AppState::new("sample:");
        let mut loader = PageLoader::new();
        let scripted = ScriptedSource::new(vec![
            page(&["r1"], "sample:/search?&query=()&cursor=1"),
            page(&["r2"], "sample:/search?&query=()&cursor=2"),
        ]);
        let source: Arc<dyn PageSource> = scripted.clone();

        ApplicationCoordinator::submit_search(&mut state, &mut loader, &source, &ctx, "");
        apply_next_completion(&mut state, &mut loader);

        ApplicationCoordinator::handle_scroll(&mut state, &mut loader, &source, &ctx, near_bottom());
        assert!(loader.is_loading());
        // Scroll events keep arriving while the fetch is pending.
        ApplicationCoordinator::handle_scroll(&mut state, &mut loader, &source, &ctx, near_bottom());
        ApplicationCoordinator::handle_scroll(&mut state, &mut loader, &source, &ctx, near_bottom());

        apply_next_completion(&mut state, &mut loader);
        assert_eq!(scripted.fetch_count(), 2);
        assert_eq!(accessions(&state), ["r1", "r2"]);
    }

    #[test]
    fn search_during_flight_supersedes_the_old_query() {
        let ctx = egui::Context::default();
        let mut state = AppState::new("sample:");
        let mut loader = PageLoader::new();
        let (gated, release) = GatedQuerySource::new(
            page(&["OLD"], "sample:/search?&query=(old)&cursor=1"),
            page(&["NEW"], ""),
        );
        let source: Arc<dyn PageSource> = gated;

        ApplicationCoordinator::submit_search(&mut state, &mut loader, &source, &ctx, "old");
        ApplicationCoordinator::submit_search(&mut state, &mut loader, &source, &ctx, "new");
        release.send(()).unwrap();

        apply_next_completion(&mut state, &mut loader);
        assert_eq!(accessions(&state), ["NEW"]);
        assert!(!state.session.has_more(), "old query's cursor must not leak");
        assert!(!loader.is_loading());
    }

    #[test]
    fn stale_generation_is_discarded_without_touching_state() {
        let ctx = egui::Context::default();
        let mut state = AppState::new("sample:");
        let mut loader = PageLoader::new();
        let source: Arc<dyn PageSource> =
            ScriptedSource::new(vec![page(&["r1"], "sample:/search?&query=(a)&cursor=1")]);

        ApplicationCoordinator::submit_search(&mut state, &mut loader, &source, &ctx, "a");
        apply_next_completion(&mut state, &mut loader);

        // A late response tagged with a superseded generation.
        let stale: Arc<dyn PageSource> = ScriptedSource::new(vec![page(&["STALE"], "")]);
        loader.start_fetch(
            stale,
            "sample:/search?&query=(a)&cursor=1".to_string(),
            FetchTag {
                generation: state.session.generation() - 1,
                first_page: false,
            },
            &ctx,
        );
        apply_next_completion(&mut state, &mut loader);

        assert_eq!(accessions(&state), ["r1"]);
        assert_eq!(
            state.session.next_link(),
            "sample:/search?&query=(a)&cursor=1",
            "cursor must not be updated from a stale response"
        );
    }

    #[test]
    fn failure_clears_the_buffer_and_loading_flag() {
        let ctx = egui::Context::default();
        let mut state = AppState::new("sample:");
        let mut loader = PageLoader::new();
        let good: Arc<dyn PageSource> =
            ScriptedSource::new(vec![page(&["r1", "r2"], "sample:/search?&query=(a)&cursor=2")]);

        ApplicationCoordinator::submit_search(&mut state, &mut loader, &good, &ctx, "a");
        apply_next_completion(&mut state, &mut loader);
        assert_eq!(state.results.len(), 2);

        let failing: Arc<dyn PageSource> = Arc::new(FailingSource);
        ApplicationCoordinator::handle_scroll(&mut state, &mut loader, &failing, &ctx, near_bottom());
        apply_next_completion(&mut state, &mut loader);

        assert!(state.results.is_empty());
        assert!(!loader.is_loading());
        assert!(state.error_message.as_deref().unwrap().contains("connection refused"));
    }

    #[test]
    fn successful_fetch_clears_a_previous_error() {
        let ctx = egui::Context::default();
        let mut state = AppState::new("sample:");
        let mut loader = PageLoader::new();

        let failing: Arc<dyn PageSource> = Arc::new(FailingSource);
        ApplicationCoordinator::submit_search(&mut state, &mut loader, &failing, &ctx, "a");
        apply_next_completion(&mut state, &mut loader);
        assert!(state.error_message.is_some());

        let good: Arc<dyn PageSource> = ScriptedSource::new(vec![page(&["r1"], "")]);
        ApplicationCoordinator::submit_search(&mut state, &mut loader, &good, &ctx, "a");
        apply_next_completion(&mut state, &mut loader);
        assert_eq!(state.error_message, None);
        assert_eq!(accessions(&state), ["r1"]);
    }
}
