//! Debounced search sessions.
//!
//! Keystrokes arrive faster than searches should run. Each input bumps a
//! monotonically increasing sequence number; a pipeline fires only after
//! the input has been quiet for the settle delay, and publishes its output
//! only if its sequence number is still the latest. Stale pipelines are
//! not force-aborted, their output is simply discarded.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;

use super::backend::SearchBackend;
use super::{SearchContext, SearchResult, search};
use crate::constants::SETTLE_DELAY;

// ============================================================================
// Search State
// ============================================================================

/// Where a search session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// No input.
    Idle,
    /// Input changed recently; waiting out the settle delay.
    Typing,
    /// A pipeline is running for the current input.
    Loading,
    /// Results below are authoritative for the current input.
    Results,
}

/// The externally visible state of the search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Current mode.
    pub mode: SearchMode,
    /// The input the state refers to.
    pub query: String,
    /// Authoritative results; only meaningful in [`SearchMode::Results`].
    pub results: Vec<SearchResult>,
}

impl SearchState {
    fn idle() -> Self {
        Self {
            mode: SearchMode::Idle,
            query: String::new(),
            results: Vec::new(),
        }
    }
}

// ============================================================================
// Search Controller
// ============================================================================

/// Debounce/session controller: exactly one result set is authoritative at
/// a time, the one from the most recently started settled pipeline.
#[derive(Debug)]
pub struct SearchController<B> {
    ctx: SearchContext<B>,
    settle: Duration,
    seq: Arc<AtomicU64>,
    tx: watch::Sender<SearchState>,
}

impl<B: SearchBackend + 'static> SearchController<B> {
    /// Create a controller with the production settle delay.
    #[must_use]
    pub fn new(ctx: SearchContext<B>) -> (Self, watch::Receiver<SearchState>) {
        Self::with_settle_delay(ctx, SETTLE_DELAY)
    }

    /// Create a controller with an explicit settle delay.
    #[must_use]
    pub fn with_settle_delay(
        ctx: SearchContext<B>,
        settle: Duration,
    ) -> (Self, watch::Receiver<SearchState>) {
        let (tx, rx) = watch::channel(SearchState::idle());
        (
            Self {
                ctx,
                settle,
                seq: Arc::new(AtomicU64::new(0)),
                tx,
            },
            rx,
        )
    }

    /// Feed the current input value, superseding any in-flight session.
    ///
    /// Empty (or whitespace-only) input resets the session to idle.
    pub fn input(&self, text: &str) {
        let query = text.trim().to_string();
        let my_seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        if query.is_empty() {
            let _ = self.tx.send(SearchState::idle());
            return;
        }

        self.tx.send_modify(|state| {
            state.mode = SearchMode::Typing;
            state.query = query.clone();
            state.results.clear();
        });

        let ctx = self.ctx.clone();
        let seq = Arc::clone(&self.seq);
        let tx = self.tx.clone();
        let settle = self.settle;

        tokio::spawn(async move {
            tokio::time::sleep(settle).await;
            if seq.load(Ordering::SeqCst) != my_seq {
                return; // Superseded while settling; never even starts.
            }

            tx.send_modify(|state| state.mode = SearchMode::Loading);
            let results = search(&ctx, &query).await;

            if seq.load(Ordering::SeqCst) != my_seq {
                return; // Superseded mid-flight; results are discarded.
            }
            let _ = tx.send(SearchState {
                mode: SearchMode::Results,
                query,
                results,
            });
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
