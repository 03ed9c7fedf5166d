//! Result reconciliation.
//!
//! Merges settled probe outcomes into the final ordered result list. The
//! precedence rules exist because the speculative probes overlap on
//! purpose: an address that is a fungible asset also has resources, so the
//! generic "Address" catch-all would otherwise duplicate every specific
//! hit.

use std::collections::HashSet;

use super::SearchResult;
use super::probes::{ProbeKind, ProbeOutcome};

/// Merge probe outcomes into an ordered, deduplicated result list.
///
/// Exactly one elimination rule applies, the first whose condition holds:
/// a curated coin-list hit suppresses the raw on-chain struct probe, and
/// any specific address identity (fungible asset, account, object — in
/// that order of inspection) suppresses the generic address catch-all.
/// Input order is preserved otherwise; the dispatcher has already placed
/// multi-result probes before single-result probes.
pub(crate) fn reconcile(outcomes: Vec<ProbeOutcome>) -> Vec<SearchResult> {
    let found: Vec<_> = outcomes
        .into_iter()
        .filter_map(|outcome| match outcome {
            ProbeOutcome::Found(tagged) => Some(tagged),
            ProbeOutcome::NotFound => None,
        })
        .collect();

    let has = |kind: ProbeKind| found.iter().any(|tagged| tagged.kind == kind);

    let suppressed = if has(ProbeKind::CoinByList) {
        Some(ProbeKind::CoinByStruct)
    } else if has(ProbeKind::FungibleAsset) {
        Some(ProbeKind::AnyResource)
    } else if has(ProbeKind::Account) {
        Some(ProbeKind::AnyResource)
    } else if has(ProbeKind::Object) {
        Some(ProbeKind::AnyResource)
    } else {
        None
    };

    let mut seen: HashSet<(String, Option<String>)> = HashSet::new();
    let mut results = Vec::new();
    for tagged in found {
        if Some(tagged.kind) == suppressed {
            continue;
        }
        let key = (tagged.result.label.clone(), tagged.result.to.clone());
        if seen.insert(key) {
            results.push(tagged.result);
        }
    }
    results
}

// ============================================================================
// Tests
// ============================================================================
