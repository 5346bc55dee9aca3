//! State owner and data layer for the poster-grid movie browser.
//!
//! The GUI consumes exactly three things from here: a [`ScreenSnapshot`]
//! read once per frame, the [`MovieFeed::load_next_items`] trigger, and the
//! one-shot [`Notice`] queue. Everything else, the worker runtime, the
//! pagination policy and the retry path, stays behind the [`MovieFeed`]
//! handle so the rendering code never blocks on a page fetch.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

pub mod bundled;
pub mod domain;
pub mod pager;
pub mod source;

pub use bundled::BundledCatalog;
pub use domain::{MovieId, MovieSummary};
pub use pager::{crosses_trigger_threshold, PaginationPhase};
pub use source::{CatalogError, CatalogPage, CatalogSource, PageRequest};

/// Commands queued from the UI-facing handle to the feed worker.
enum FeedCommand {
    FetchPage { page: u32 },
}

/// One-shot notification from the feed. Draining consumes it, so a notice is
/// surfaced exactly once no matter how often the screen re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Monotonic per-feed sequence number, for ordering and log correlation.
    pub seq: u64,
    pub message: String,
}

/// Read model the screens render from. Cheap to clone: the movie list stays
/// behind an `Arc` and only grows, so a held snapshot never changes under
/// the caller.
#[derive(Debug, Clone)]
pub struct ScreenSnapshot {
    pub movies: Arc<Vec<MovieSummary>>,
    pub phase: PaginationPhase,
    /// Most recent page-load failure, kept until a page succeeds so the
    /// screen can offer a retry affordance.
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct FeedConfig {
    pub page_size: usize,
    /// Capacity of the handle-to-worker command queue.
    pub command_queue: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            command_queue: 16,
        }
    }
}

struct FeedState {
    movies: Arc<Vec<MovieSummary>>,
    phase: PaginationPhase,
    last_error: Option<String>,
    /// List length at the moment the most recent request was dispatched.
    /// A new trigger is honored only once the list has grown past this
    /// point, so a failed page does not re-fire every frame while the grid
    /// sits at the end of the list.
    requested_at_len: Option<usize>,
    next_page: u32,
    notices: Vec<Notice>,
    notice_seq: u64,
}

impl FeedState {
    fn new() -> Self {
        Self {
            movies: Arc::new(Vec::new()),
            phase: PaginationPhase::Idle,
            last_error: None,
            requested_at_len: None,
            next_page: 0,
            notices: Vec::new(),
            notice_seq: 0,
        }
    }

    fn push_notice(&mut self, message: String) {
        self.notice_seq += 1;
        self.notices.push(Notice {
            seq: self.notice_seq,
            message,
        });
    }
}

struct FeedShared {
    state: Mutex<FeedState>,
}

impl FeedShared {
    fn apply_page(&self, page: CatalogPage) {
        let mut state = self.state.lock();
        let added = page.movies.len();
        if added > 0 {
            Arc::make_mut(&mut state.movies).extend(page.movies);
        }
        state.phase = match page.next_page {
            Some(next) => {
                state.next_page = next;
                PaginationPhase::Idle
            }
            None => PaginationPhase::Exhausted,
        };
        state.last_error = None;
        info!(
            added,
            total = state.movies.len(),
            exhausted = state.phase.is_exhausted(),
            "catalog page applied"
        );
    }

    fn apply_failure(&self, err: CatalogError) {
        let mut state = self.state.lock();
        state.phase = PaginationPhase::Idle;
        let message = err.to_string();
        state.last_error = Some(message.clone());
        state.push_notice(message);
    }
}

/// Owner of the movie-list state.
///
/// `launch` spawns a worker thread with its own tokio runtime and requests
/// the first page; afterwards the handle is driven entirely by the UI
/// thread. Dropping the feed closes the command queue and the worker exits
/// on its own.
pub struct MovieFeed {
    shared: Arc<FeedShared>,
    cmd_tx: Sender<FeedCommand>,
}

impl MovieFeed {
    pub fn launch(source: Box<dyn CatalogSource>, config: FeedConfig) -> MovieFeed {
        let (cmd_tx, cmd_rx) = bounded(config.command_queue);
        let shared = Arc::new(FeedShared {
            state: Mutex::new(FeedState::new()),
        });
        spawn_feed_worker(source, config, Arc::clone(&shared), cmd_rx);
        let feed = MovieFeed { shared, cmd_tx };
        feed.load_next_items();
        feed
    }

    /// Current read model. Called once per frame by the shell.
    pub fn snapshot(&self) -> ScreenSnapshot {
        let state = self.shared.state.lock();
        ScreenSnapshot {
            movies: Arc::clone(&state.movies),
            phase: state.phase,
            last_error: state.last_error.clone(),
        }
    }

    /// Ask for the next page. Safe to call every frame: the request is
    /// dispatched only when the feed is idle and the list has grown since
    /// the previous dispatch, so one threshold crossing yields one fetch.
    pub fn load_next_items(&self) {
        let mut state = self.shared.state.lock();
        if !state.phase.accepts_load_request() {
            return;
        }
        if let Some(requested_at) = state.requested_at_len {
            if state.movies.len() <= requested_at {
                return;
            }
        }
        let page = state.next_page;
        self.dispatch_locked(&mut state, page);
    }

    /// Re-request the page that last failed. No-op unless a failure is
    /// actually pending.
    pub fn retry_failed_page(&self) {
        let mut state = self.shared.state.lock();
        if !state.phase.accepts_load_request() || state.last_error.is_none() {
            return;
        }
        let page = state.next_page;
        self.dispatch_locked(&mut state, page);
    }

    /// Take all pending notices. Each notice is returned exactly once.
    pub fn drain_notices(&self) -> Vec<Notice> {
        let mut state = self.shared.state.lock();
        std::mem::take(&mut state.notices)
    }

    fn dispatch_locked(&self, state: &mut FeedState, page: u32) {
        state.phase = PaginationPhase::LoadingMore;
        state.requested_at_len = Some(state.movies.len());
        match self.cmd_tx.try_send(FeedCommand::FetchPage { page }) {
            Ok(()) => debug!(page, "queued catalog page fetch"),
            Err(err) => {
                let reason = match err {
                    TrySendError::Full(_) => "command queue is full",
                    TrySendError::Disconnected(_) => "worker is gone",
                };
                warn!(page, "failed to queue page fetch: {reason}");
                state.phase = PaginationPhase::Idle;
                let message = format!("movie feed unavailable: {reason}");
                state.last_error = Some(message.clone());
                state.push_notice(message);
            }
        }
    }
}

fn spawn_feed_worker(
    source: Box<dyn CatalogSource>,
    config: FeedConfig,
    shared: Arc<FeedShared>,
    cmd_rx: Receiver<FeedCommand>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to start feed worker runtime: {err}");
                // Close the queue first so later dispatches see a dead
                // worker instead of queueing into the void.
                drop(cmd_rx);
                shared.apply_failure(CatalogError::Unavailable(format!(
                    "worker startup failure: {err}"
                )));
                return;
            }
        };
        runtime.block_on(async move {
            info!("movie feed worker ready");
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    FeedCommand::FetchPage { page } => {
                        debug!(page, page_size = config.page_size, "fetching catalog page");
                        let request = PageRequest {
                            page,
                            page_size: config.page_size,
                        };
                        match source.fetch_page(request).await {
                            Ok(fetched) => shared.apply_page(fetched),
                            Err(err) => {
                                warn!(page, "catalog page fetch failed: {err}");
                                shared.apply_failure(err);
                            }
                        }
                    }
                }
            }
            debug!("feed command channel closed, worker exiting");
        });
    });
}

#[cfg(test)]
#[path = "tests/feed_tests.rs"]
mod tests;
