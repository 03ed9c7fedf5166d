//! Incremental, multi-source search.
//!
//! A raw query string is classified, fanned out as a batch of speculative
//! probes against independent data sources, and the settled outcomes are
//! reconciled into one ranked result list. Probes are failure-isolated: a
//! source that errors simply contributes nothing.
//!
//! # Module Organization
//!
//! - [`classifier`] - pure query classification and branch selection
//! - [`backend`] - the capability trait probes call through
//! - [`probes`] - the speculative lookups and their dispatch
//! - [`reconciler`] - precedence elimination and ordering
//! - [`session`] - debounced, latest-wins search sessions
//! - [`telemetry`] - per-search stats events

use std::sync::Arc;
use std::time::Instant;

pub mod backend;
pub mod classifier;
mod probes;
mod reconciler;
pub mod session;
mod telemetry;

pub use backend::SearchBackend;
pub use classifier::{Branch, Classification, classify};
pub use session::{SearchController, SearchMode, SearchState};

use crate::client::CoinRegistry;
use telemetry::SearchStatus;

/// Label of the non-navigable sentinel entry.
pub const NOT_FOUND_LABEL: &str = "No Results";

// ============================================================================
// Search Result
// ============================================================================

/// A single search result, immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Display text.
    pub label: String,
    /// Navigation target; `None` marks the non-clickable sentinel.
    pub to: Option<String>,
    /// Optional image URL (coin logos).
    pub image: Option<String>,
}

impl SearchResult {
    /// A navigable result without an image.
    #[must_use]
    pub fn new(label: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: Some(to.into()),
            image: None,
        }
    }

    /// The sentinel "No Results" entry.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            label: NOT_FOUND_LABEL.to_string(),
            to: None,
            image: None,
        }
    }

    /// Whether selecting this result navigates anywhere.
    #[must_use]
    #[allow(dead_code)] // Public API
    pub fn is_navigable(&self) -> bool {
        self.to.is_some()
    }
}

// ============================================================================
// Search Context
// ============================================================================

/// Read-only request context shared by every probe of a session.
///
/// Passed explicitly into the pipeline; probes read it and nothing else.
#[derive(Debug)]
pub struct SearchContext<B> {
    /// Network name, for telemetry.
    pub network: String,
    /// The backing lookup capabilities.
    pub backend: Arc<B>,
    /// The cached coin registry.
    pub coins: Arc<CoinRegistry>,
}

impl<B> SearchContext<B> {
    /// Assemble a context from its shared parts.
    #[must_use]
    pub fn new(network: impl Into<String>, backend: Arc<B>, coins: Arc<CoinRegistry>) -> Self {
        Self {
            network: network.into(),
            backend,
            coins,
        }
    }
}

impl<B> Clone for SearchContext<B> {
    fn clone(&self) -> Self {
        Self {
            network: self.network.clone(),
            backend: Arc::clone(&self.backend),
            coins: Arc::clone(&self.coins),
        }
    }
}

// ============================================================================
// Search
// ============================================================================

/// Run one full search: classify, dispatch, reconcile.
///
/// Always returns at least one entry; an empty outcome is represented by
/// the non-navigable sentinel. Identical query/network pairs return
/// identical lists, subject only to backing-data changes.
pub async fn search<B: SearchBackend>(ctx: &SearchContext<B>, query: &str) -> Vec<SearchResult> {
    let started = Instant::now();
    let classification = classifier::classify(query);

    let outcomes = probes::dispatch(ctx, &classification).await;
    let mut results = reconciler::reconcile(outcomes);

    // The owned-objects query is expensive; only issue it once everything
    // cheaper has settled empty, and only for address-shaped input.
    if results.is_empty() && (classification.is_32_byte_hex || classification.is_address_like) {
        if let Some(fallback) =
            probes::any_owned_objects_probe(ctx, &classification.rewritten).await
        {
            results.push(fallback);
        }
    }

    let status = if results.is_empty() {
        SearchStatus::NotFound
    } else {
        SearchStatus::Success
    };
    telemetry::emit_search_stats(
        &ctx.network,
        &classification.rewritten,
        status,
        started.elapsed(),
    );

    if results.is_empty() {
        results.push(SearchResult::not_found());
    }
    results
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, EmojicoinMarket};
    use crate::test_utils::{CoinMother, StubBackend};

    const HEX_32: &str = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";

    fn context(backend: StubBackend) -> SearchContext<StubBackend> {
        SearchContext::new(
            "testnet",
            Arc::new(backend),
            Arc::new(CoinRegistry::empty()),
        )
    }

    fn context_with_coins(
        backend: StubBackend,
        coins: CoinRegistry,
    ) -> SearchContext<StubBackend> {
        SearchContext::new("testnet", Arc::new(backend), Arc::new(coins))
    }

    fn canonical(raw: &str) -> String {
        Address::try_standardize(raw).unwrap().to_string()
    }

    #[tokio::test]
    async fn test_unclassifiable_query_dispatches_no_probes() {
        let ctx = context(StubBackend::new());
        let results = search(&ctx, "pq").await;

        assert_eq!(results, vec![SearchResult::not_found()]);
        assert!(!results[0].is_navigable());
        assert_eq!(ctx.backend.calls().len(), 0);
    }

    #[tokio::test]
    async fn test_account_hit_suppresses_generic_address_entry() {
        // The address exists as an account (and therefore has resources),
        // but is no object, fungible asset, or coin.
        let backend = StubBackend::new()
            .with_account(HEX_32)
            .with_resources(HEX_32);
        let ctx = context(backend);

        let results = search(&ctx, HEX_32).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, format!("Account {}", canonical(HEX_32)));
        assert!(!results.iter().any(|r| r.label.starts_with("Address")));
    }

    #[tokio::test]
    async fn test_numeric_transaction_only() {
        let backend = StubBackend::new().with_transaction_version(12345);
        let ctx = context(backend);

        let results = search(&ctx, "12345").await;

        assert_eq!(
            results,
            vec![SearchResult::new("Transaction Version 12345", "/txn/12345")]
        );
        // All three numeric probes were dispatched.
        let calls = ctx.backend.calls();
        assert!(calls.iter().any(|c| c == "transaction_by_version:12345"));
        assert!(calls.iter().any(|c| c == "block_by_height:12345"));
        assert!(calls.iter().any(|c| c == "block_by_version:12345"));
        assert_eq!(calls.len(), 3);
    }

    #[tokio::test]
    async fn test_numeric_ambiguity_keeps_dispatch_order() {
        let backend = StubBackend::new()
            .with_transaction_version(777)
            .with_block_height(777)
            .with_block_version(777, 42);
        let ctx = context(backend);

        let results = search(&ctx, "777").await;

        let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Transaction Version 777", "Block 777", "Block with Txn Version 777"]
        );
        // The by-version entry navigates to the containing block's height.
        assert_eq!(results[2].to.as_deref(), Some("/block/42"));
    }

    #[tokio::test]
    async fn test_petra_suffix_resolves_via_canonical_name() {
        let backend = StubBackend::new().with_ans_name("foo.apt", "0xcafe");
        let ctx = context(backend);

        let results = search(&ctx, "foo.petra").await;

        assert_eq!(results.len(), 1);
        let address = Address::try_standardize("0xcafe").unwrap();
        assert_eq!(
            results[0].label,
            format!("Account {} foo.apt", address.truncate())
        );
        assert_eq!(results[0].to.as_deref(), Some(format!("/account/{address}").as_str()));
        // The probe saw the rewritten name, not the alternate suffix.
        assert!(ctx.backend.calls().contains(&"resolve_name:foo.apt".to_string()));
    }

    #[tokio::test]
    async fn test_label_query_returns_all_matches() {
        let ctx = context(StubBackend::new());

        let results = search(&ctx, "swap").await;

        assert!(results.len() >= 5);
        for result in &results {
            assert!(result.label.starts_with("Account 0x"));
            assert!(result.to.as_deref().unwrap_or("").starts_with("/account/0x"));
        }
        assert!(results.iter().any(|r| r.label.ends_with("PancakeSwap")));
        assert!(results.iter().any(|r| r.label.ends_with("SushiSwap")));
    }

    #[tokio::test]
    async fn test_search_is_idempotent() {
        let backend = StubBackend::new().with_account("0xa").with_resources("0xa");
        let ctx = context(backend);

        let first = search(&ctx, "0xA").await;
        let second = search(&ctx, "0xA").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_fallback_not_found_when_nothing_owned() {
        let ctx = context(StubBackend::new());

        let results = search(&ctx, "0xdead").await;

        assert_eq!(results, vec![SearchResult::not_found()]);
        // The heavy probe still ran, after the cheap ones.
        let calls = ctx.backend.calls();
        assert_eq!(calls.last().map(String::as_str), Some("owns_any_objects"));
    }

    #[tokio::test]
    async fn test_fallback_finds_owner_of_objects() {
        let backend = StubBackend::new().with_owned_objects("0xdead");
        let ctx = context(backend);

        let results = search(&ctx, "0xdead").await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, format!("Address {}", canonical("0xdead")));
        let calls = ctx.backend.calls();
        // Gated: the owned-objects probe is the last call, after all four
        // cheaper address probes settled empty.
        assert_eq!(calls.last().map(String::as_str), Some("owns_any_objects"));
        assert_eq!(calls.len(), 5);
    }

    #[tokio::test]
    async fn test_fallback_skipped_when_cheap_probes_hit() {
        let backend = StubBackend::new().with_account("0xa").with_resources("0xa");
        let ctx = context(backend);

        let _ = search(&ctx, "0xa").await;

        assert!(!ctx.backend.calls().iter().any(|c| c == "owns_any_objects"));
    }

    #[tokio::test]
    async fn test_coin_list_match_suppresses_struct_probe_result() {
        let registry = CoinRegistry::new(vec![CoinMother::legacy_coin(
            "Aptos Coin",
            "APT",
            "0x1::aptos_coin::AptosCoin",
        )]);
        let backend = StubBackend::new().with_coin_struct("0x1::aptos_coin::AptosCoin");
        let ctx = context_with_coins(backend, registry);

        let results = search(&ctx, "0x1::aptos_coin::AptosCoin").await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, "Aptos Coin - APT");
        assert_eq!(results[0].to.as_deref(), Some("/coin/0x1::aptos_coin::AptosCoin"));
    }

    #[tokio::test]
    async fn test_struct_probe_alone_survives() {
        let backend = StubBackend::new().with_coin_struct("0x1::aptos_coin::AptosCoin");
        let ctx = context(backend);

        let results = search(&ctx, "0x1::aptos_coin::AptosCoin").await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, "Coin 0x1::aptos_coin::AptosCoin");
    }

    #[tokio::test]
    async fn test_emoji_market_lookup() {
        let market = EmojicoinMarket::derive("\u{1F4A5}").unwrap();
        let backend = StubBackend::new().with_account(market.market_address.as_str());
        let ctx = context(backend);

        let results = search(&ctx, "\u{1F4A5}").await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].label, "\u{1F4A5} emojicoin");
        assert_eq!(results[0].to.as_deref(), Some(format!("/coin/{}", market.coin_type).as_str()));
        assert_eq!(results[1].label, "\u{1F4A5} emojicoin LP");
    }

    #[tokio::test]
    async fn test_emoji_market_absent_yields_sentinel() {
        let ctx = context(StubBackend::new());

        let results = search(&ctx, "\u{1F680}").await;

        assert_eq!(results, vec![SearchResult::not_found()]);
    }

    #[tokio::test]
    async fn test_backend_errors_degrade_to_not_found() {
        let backend = StubBackend::new().failing();
        let ctx = context(backend);

        let results = search(&ctx, HEX_32).await;

        // Every probe errored, including the fallback; the search still
        // completes with the sentinel instead of propagating.
        assert_eq!(results, vec![SearchResult::not_found()]);
    }

    #[tokio::test]
    async fn test_hex_query_dispatches_transaction_and_address_probes() {
        let backend = StubBackend::new()
            .with_account(HEX_32)
            .with_resources(HEX_32)
            .with_transaction_hash(HEX_32);
        let ctx = context(backend);

        let results = search(&ctx, HEX_32).await;

        let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                format!("Transaction {HEX_32}").as_str(),
                format!("Account {}", canonical(HEX_32)).as_str(),
            ]
        );
    }
}
