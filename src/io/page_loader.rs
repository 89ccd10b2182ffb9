//! Asynchronous page fetching.
//!
//! Fetches run on background threads so the GUI stays responsive; results
//! come back over a channel and are polled once per frame. At most one
//! fetch is pending at a time, and the pending slot itself is the loading
//! flag: it is installed synchronously before the worker is spawned and
//! cleared only when the completion is consumed, so there is no window
//! where an unapplied result is invisible to the loading gate.

use eframe::egui;
use protview::{Page, PageSource};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

/// Identity of a fetch: the query generation it was issued for and whether
/// it replaces or extends the buffer. A completion whose generation no
/// longer matches the session is discarded by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTag {
    pub generation: u64,
    pub first_page: bool,
}

struct PendingFetch {
    tag: FetchTag,
    receiver: Receiver<Result<Page, String>>,
}

/// Dispatches page fetches to background threads, one at a time.
#[derive(Default)]
pub struct PageLoader {
    pending: Option<PendingFetch>,
}

impl PageLoader {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// True while a fetch is in flight. This is the sole gate preventing
    /// overlapping continuation fetches.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts fetching `url` on a background thread.
    ///
    /// A fetch started while another is pending supersedes it: the old
    /// channel is dropped and the superseded worker's late result goes
    /// nowhere. Used by SEARCH/SORT to replace an in-flight fetch of an
    /// older generation; continuations never do this (the caller gates
    /// them on `is_loading`).
    pub fn start_fetch(
        &mut self,
        source: Arc<dyn PageSource>,
        url: String,
        tag: FetchTag,
        ctx: &egui::Context,
    ) {
        let (sender, receiver) = channel();

        // Loading flag is set before the worker can possibly run.
        self.pending = Some(PendingFetch { tag, receiver });

        let ctx_handle = ctx.clone();
        thread::spawn(move || {
            let result = source.fetch_page(&url).map_err(|error| format!("{error:#}"));

            // Send fails when this fetch was superseded; the result is
            // intentionally dropped then.
            let _ = sender.send(result);

            // Notify the GUI thread to repaint
            ctx_handle.request_repaint();
        });
    }

    /// Polls for a completed fetch. Called once per frame.
    ///
    /// Returns the fetch's tag and outcome when the worker has finished,
    /// clearing the loading flag; returns `None` while the fetch is still
    /// running or no fetch is active.
    pub fn check_completion(&mut self) -> Option<(FetchTag, Result<Page, String>)> {
        let pending = self.pending.as_ref()?;
        match pending.receiver.try_recv() {
            Ok(result) => {
                let tag = pending.tag;
                self.pending = None;
                Some((tag, result))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // Worker died without sending (panic in the source).
                let tag = pending.tag;
                self.pending = None;
                Some((tag, Err("page fetch worker terminated unexpectedly".to_string())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use protview::ProteinRow;
    use std::sync::mpsc::{Receiver as StdReceiver, Sender};
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    fn page_with(accession: &str) -> Page {
        Page {
            rows: vec![ProteinRow {
                accession: accession.to_string(),
                entry_name: String::new(),
                genes: Vec::new(),
                organism: String::new(),
                location: None,
                length: None,
            }],
            next_link: String::new(),
        }
    }

    /// Source that answers every URL with the same fixed page.
    struct FixedSource(Page);

    impl PageSource for FixedSource {
        fn fetch_page(&self, _url: &str) -> anyhow::Result<Page> {
            Ok(self.0.clone())
        }
    }

    /// Source that blocks until the test releases it.
    struct GatedSource {
        gate: Mutex<StdReceiver<()>>,
        page: Page,
    }

    impl GatedSource {
        fn new(page: Page) -> (Arc<Self>, Sender<()>) {
            let (sender, receiver) = channel();
            (
                Arc::new(Self {
                    gate: Mutex::new(receiver),
                    page,
                }),
                sender,
            )
        }
    }

    impl PageSource for GatedSource {
        fn fetch_page(&self, _url: &str) -> anyhow::Result<Page> {
            self.gate.lock().unwrap().recv().ok();
            Ok(self.page.clone())
        }
    }

    struct FailingSource;

    impl PageSource for FailingSource {
        fn fetch_page(&self, url: &str) -> anyhow::Result<Page> {
            bail!("no route to {url}")
        }
    }

    fn wait_for_completion(loader: &mut PageLoader) -> (FetchTag, Result<Page, String>) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(completed) = loader.check_completion() {
                return completed;
            }
            assert!(Instant::now() < deadline, "fetch did not complete in time");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn loader_starts_idle() {
        let mut loader = PageLoader::new();
        assert!(!loader.is_loading());
        assert!(loader.check_completion().is_none());
    }

    #[test]
    fn completion_carries_the_tag_and_page() {
        let mut loader = PageLoader::new();
        let ctx = egui::Context::default();
        let tag = FetchTag {
            generation: 3,
            first_page: true,
        };

        loader.start_fetch(
            Arc::new(FixedSource(page_with("P1"))),
            "sample:/search?&query=()".to_string(),
            tag,
            &ctx,
        );
        assert!(loader.is_loading());

        let (completed_tag, result) = wait_for_completion(&mut loader);
        assert_eq!(completed_tag, tag);
        assert_eq!(result.unwrap().rows[0].accession, "P1");
        assert!(!loader.is_loading());
    }

    #[test]
    fn superseding_fetch_drops_the_old_result() {
        let mut loader = PageLoader::new();
        let ctx = egui::Context::default();
        let (gated, release) = GatedSource::new(page_with("OLD"));

        loader.start_fetch(
            gated,
            "url-1".to_string(),
            FetchTag {
                generation: 1,
                first_page: true,
            },
            &ctx,
        );

        loader.start_fetch(
            Arc::new(FixedSource(page_with("NEW"))),
            "url-2".to_string(),
            FetchTag {
                generation: 2,
                first_page: true,
            },
            &ctx,
        );

        release.send(()).unwrap();
        let (tag, result) = wait_for_completion(&mut loader);
        assert_eq!(tag.generation, 2);
        assert_eq!(result.unwrap().rows[0].accession, "NEW");
        assert!(loader.check_completion().is_none(), "old result must not surface");
    }

    #[test]
    fn failures_surface_as_error_strings() {
        let mut loader = PageLoader::new();
        let ctx = egui::Context::default();
        loader.start_fetch(
            Arc::new(FailingSource),
            "https://unreachable.example/search".to_string(),
            FetchTag {
                generation: 1,
                first_page: true,
            },
            &ctx,
        );
        let (_, result) = wait_for_completion(&mut loader);
        let message = result.unwrap_err();
        assert!(message.contains("no route"), "unexpected message: {message}");
        assert!(!loader.is_loading());
    }
}
