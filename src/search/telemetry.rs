//! Search telemetry.
//!
//! One structured event per completed search, emitted through `tracing`.
//! Emission is synchronous field formatting only and never blocks the
//! pipeline; subscribers decide where the event goes.

use std::time::Duration;

/// Whether a search produced any result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchStatus {
    Success,
    NotFound,
}

impl SearchStatus {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::NotFound => "not_found",
        }
    }
}

/// Emit the per-search stats event.
pub(crate) fn emit_search_stats(
    network: &str,
    query: &str,
    status: SearchStatus,
    duration: Duration,
) {
    tracing::info!(
        target: "aptex::telemetry",
        network,
        query,
        status = status.as_str(),
        duration_ms = duration.as_millis() as u64,
        "search completed"
    );
}
