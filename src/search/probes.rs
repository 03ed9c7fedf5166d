//! Speculative lookup probes.
//!
//! Each probe wraps exactly one backend call. A probe can find a result,
//! find nothing, or fail; failure is trapped inside the probe and degrades
//! to "no match", so one misbehaving source never aborts its siblings. All
//! probes of a batch run concurrently on the calling task; the only
//! ordering guarantee is that the whole batch has settled before the
//! reconciler runs.

use futures::FutureExt;
use futures::future::{BoxFuture, join_all};

use super::classifier::{Branch, Classification};
use super::{SearchContext, SearchResult};
use crate::constants::{FA_METADATA_RESOURCE, OBJECT_CORE_RESOURCE, coin_info_resource};
use crate::domain::{Address, EmojicoinMarket, ExplorerError};
use crate::labels::matching_labels;
use crate::search::backend::SearchBackend;

// ============================================================================
// Probe Outcomes
// ============================================================================

/// Which probe produced a result; the reconciler's precedence rules match
/// on this tag rather than on label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProbeKind {
    Account,
    Object,
    FungibleAsset,
    AnyResource,
    CoinByStruct,
    CoinByList,
    KnownLabel,
    Ans,
    Transaction,
    BlockByHeight,
    BlockByVersion,
    Emojicoin,
}

/// A found result together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TaggedResult {
    pub kind: ProbeKind,
    pub result: SearchResult,
}

/// The settled outcome of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProbeOutcome {
    Found(TaggedResult),
    NotFound,
}

impl ProbeOutcome {
    fn found(kind: ProbeKind, result: SearchResult) -> Self {
        Self::Found(TaggedResult { kind, result })
    }
}

/// Trap a probe failure, logging it and degrading to absence.
fn swallow<T>(probe: &'static str, result: Result<T, ExplorerError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("{probe} probe failed: {e}");
            None
        }
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Dispatch every probe applicable to the classified query and await the
/// full batch.
///
/// Multi-result fuzzy probes (coin-list, known-label, emoji-market) and
/// single-result probes run concurrently; the returned outcomes place the
/// multi-result batch first, then the single-result probes in dispatch
/// order.
pub(crate) async fn dispatch<B: SearchBackend>(
    ctx: &SearchContext<B>,
    classification: &Classification,
) -> Vec<ProbeOutcome> {
    let query = classification.rewritten.as_str();
    let mut singles: Vec<BoxFuture<'_, ProbeOutcome>> = Vec::new();
    let mut multis: Vec<BoxFuture<'_, Vec<TaggedResult>>> = Vec::new();

    match classification.branch() {
        Branch::AnsName => {
            singles.push(ans_probe(ctx, query).boxed());
        }
        Branch::StructPath => {
            multis.push(coin_list_probe(ctx, query).boxed());
            singles.push(coin_by_struct_probe(ctx, query).boxed());
        }
        Branch::Numeric(value) => {
            // A number may be a height and a version at once; probe all
            // three readings.
            singles.push(transaction_by_version_probe(ctx, value).boxed());
            singles.push(block_by_height_probe(ctx, value).boxed());
            singles.push(block_by_version_probe(ctx, value).boxed());
        }
        Branch::HexHash => {
            // 32 bytes of hex may be a transaction hash or an address.
            singles.push(transaction_by_hash_probe(ctx, query).boxed());
            singles.extend(address_probes(ctx, query));
            multis.push(coin_list_probe(ctx, query).boxed());
        }
        Branch::Address => {
            singles.extend(address_probes(ctx, query));
            multis.push(coin_list_probe(ctx, query).boxed());
        }
        Branch::Emoji => {
            multis.push(emoji_market_probe(ctx, query).boxed());
        }
        Branch::FreeText => {
            multis.push(coin_list_probe(ctx, query).boxed());
            multis.push(known_label_probe(query).boxed());
        }
        Branch::None => {}
    }

    let (multi_results, single_results) =
        futures::join!(join_all(multis), join_all(singles));

    let mut outcomes: Vec<ProbeOutcome> = multi_results
        .into_iter()
        .flatten()
        .map(ProbeOutcome::Found)
        .collect();
    outcomes.extend(single_results);
    outcomes
}

/// The four speculative probes for an address-shaped query, in dispatch
/// order: fungible asset, account, object, then the generic catch-all.
fn address_probes<'a, B: SearchBackend>(
    ctx: &'a SearchContext<B>,
    query: &str,
) -> Vec<BoxFuture<'a, ProbeOutcome>> {
    let Some(address) = Address::try_standardize(query) else {
        return Vec::new();
    };

    vec![
        fungible_asset_probe(ctx, address.clone()).boxed(),
        account_probe(ctx, address.clone()).boxed(),
        object_probe(ctx, address.clone()).boxed(),
        any_resource_probe(ctx, address).boxed(),
    ]
}

// ============================================================================
// Single-result Probes
// ============================================================================

async fn account_probe<B: SearchBackend>(
    ctx: &SearchContext<B>,
    address: Address,
) -> ProbeOutcome {
    match swallow("account", ctx.backend.account_exists(&address).await) {
        Some(true) => ProbeOutcome::found(
            ProbeKind::Account,
            SearchResult::new(format!("Account {address}"), format!("/account/{address}")),
        ),
        _ => ProbeOutcome::NotFound,
    }
}

async fn object_probe<B: SearchBackend>(ctx: &SearchContext<B>, address: Address) -> ProbeOutcome {
    match swallow(
        "object",
        ctx.backend
            .resource_exists(&address, OBJECT_CORE_RESOURCE)
            .await,
    ) {
        Some(true) => ProbeOutcome::found(
            ProbeKind::Object,
            SearchResult::new(format!("Object {address}"), format!("/object/{address}")),
        ),
        _ => ProbeOutcome::NotFound,
    }
}

async fn fungible_asset_probe<B: SearchBackend>(
    ctx: &SearchContext<B>,
    address: Address,
) -> ProbeOutcome {
    match swallow(
        "fungible-asset",
        ctx.backend
            .resource_exists(&address, FA_METADATA_RESOURCE)
            .await,
    ) {
        Some(true) => ProbeOutcome::found(
            ProbeKind::FungibleAsset,
            SearchResult::new(
                format!("Fungible Asset {address}"),
                format!("/fungible_asset/{address}"),
            ),
        ),
        _ => ProbeOutcome::NotFound,
    }
}

async fn any_resource_probe<B: SearchBackend>(
    ctx: &SearchContext<B>,
    address: Address,
) -> ProbeOutcome {
    match swallow("any-resource", ctx.backend.has_any_resources(&address).await) {
        Some(true) => ProbeOutcome::found(
            ProbeKind::AnyResource,
            SearchResult::new(format!("Address {address}"), format!("/account/{address}")),
        ),
        _ => ProbeOutcome::NotFound,
    }
}

async fn coin_by_struct_probe<B: SearchBackend>(
    ctx: &SearchContext<B>,
    struct_tag: &str,
) -> ProbeOutcome {
    // The coin-info resource lives at the address the struct path names.
    let Some(address) = struct_tag
        .split("::")
        .next()
        .and_then(Address::try_standardize)
    else {
        return ProbeOutcome::NotFound;
    };

    match swallow(
        "coin-by-struct",
        ctx.backend
            .resource_exists(&address, &coin_info_resource(struct_tag))
            .await,
    ) {
        Some(true) => ProbeOutcome::found(
            ProbeKind::CoinByStruct,
            SearchResult::new(format!("Coin {struct_tag}"), format!("/coin/{struct_tag}")),
        ),
        _ => ProbeOutcome::NotFound,
    }
}

async fn ans_probe<B: SearchBackend>(ctx: &SearchContext<B>, name: &str) -> ProbeOutcome {
    let record = match swallow("ans", ctx.backend.resolve_name(name).await) {
        Some(Some(record)) => record,
        _ => return ProbeOutcome::NotFound,
    };

    match record.primary_address() {
        Some(address) => ProbeOutcome::found(
            ProbeKind::Ans,
            SearchResult::new(
                format!("Account {} {name}", address.truncate()),
                format!("/account/{address}"),
            ),
        ),
        None => ProbeOutcome::NotFound,
    }
}

async fn transaction_by_hash_probe<B: SearchBackend>(
    ctx: &SearchContext<B>,
    hash: &str,
) -> ProbeOutcome {
    match swallow("transaction", ctx.backend.transaction_by_hash(hash).await) {
        Some(Some(_)) => ProbeOutcome::found(
            ProbeKind::Transaction,
            SearchResult::new(format!("Transaction {hash}"), format!("/txn/{hash}")),
        ),
        _ => ProbeOutcome::NotFound,
    }
}

async fn transaction_by_version_probe<B: SearchBackend>(
    ctx: &SearchContext<B>,
    version: u64,
) -> ProbeOutcome {
    match swallow(
        "transaction-by-version",
        ctx.backend.transaction_by_version(version).await,
    ) {
        Some(Some(_)) => ProbeOutcome::found(
            ProbeKind::Transaction,
            SearchResult::new(
                format!("Transaction Version {version}"),
                format!("/txn/{version}"),
            ),
        ),
        _ => ProbeOutcome::NotFound,
    }
}

async fn block_by_height_probe<B: SearchBackend>(
    ctx: &SearchContext<B>,
    height: u64,
) -> ProbeOutcome {
    match swallow("block-by-height", ctx.backend.block_by_height(height).await) {
        Some(Some(_)) => ProbeOutcome::found(
            ProbeKind::BlockByHeight,
            SearchResult::new(format!("Block {height}"), format!("/block/{height}")),
        ),
        _ => ProbeOutcome::NotFound,
    }
}

async fn block_by_version_probe<B: SearchBackend>(
    ctx: &SearchContext<B>,
    version: u64,
) -> ProbeOutcome {
    match swallow(
        "block-by-version",
        ctx.backend.block_by_version(version).await,
    ) {
        Some(Some(block)) => ProbeOutcome::found(
            ProbeKind::BlockByVersion,
            SearchResult::new(
                format!("Block with Txn Version {version}"),
                format!("/block/{}", block.height),
            ),
        ),
        _ => ProbeOutcome::NotFound,
    }
}

// ============================================================================
// Multi-result Probes
// ============================================================================

async fn coin_list_probe<B: SearchBackend>(
    ctx: &SearchContext<B>,
    query: &str,
) -> Vec<TaggedResult> {
    ctx.coins
        .search(query)
        .into_iter()
        .filter_map(|coin| {
            let label = format!("{} - {}", coin.name, coin.display_symbol());
            let to = match (&coin.token_address, &coin.fa_address) {
                (Some(token), _) => format!("/coin/{token}"),
                (None, Some(fa)) => format!("/fungible_asset/{fa}"),
                (None, None) => return None,
            };
            let mut result = SearchResult::new(label, to);
            result.image = coin.logo_url.clone();
            Some(TaggedResult {
                kind: ProbeKind::CoinByList,
                result,
            })
        })
        .collect()
}

async fn known_label_probe(query: &str) -> Vec<TaggedResult> {
    matching_labels(query)
        .into_iter()
        .filter_map(|(address, label)| {
            let address = Address::try_standardize(address)?;
            Some(TaggedResult {
                kind: ProbeKind::KnownLabel,
                result: SearchResult::new(
                    format!("Account {} {label}", address.truncate()),
                    format!("/account/{address}"),
                ),
            })
        })
        .collect()
}

async fn emoji_market_probe<B: SearchBackend>(
    ctx: &SearchContext<B>,
    symbol: &str,
) -> Vec<TaggedResult> {
    let Some(market) = EmojicoinMarket::derive(symbol) else {
        return Vec::new();
    };

    match swallow(
        "emoji-market",
        ctx.backend.account_exists(&market.market_address).await,
    ) {
        Some(true) => vec![
            TaggedResult {
                kind: ProbeKind::Emojicoin,
                result: SearchResult::new(
                    format!("{symbol} emojicoin"),
                    format!("/coin/{}", market.coin_type),
                ),
            },
            TaggedResult {
                kind: ProbeKind::Emojicoin,
                result: SearchResult::new(
                    format!("{symbol} emojicoin LP"),
                    format!("/coin/{}", market.lp_type),
                ),
            },
        ],
        _ => Vec::new(),
    }
}

// ============================================================================
// Fallback Probe
// ============================================================================

/// The gated "does this address own anything at all" probe.
///
/// Only called once every other probe for an address query has settled
/// empty; it is too heavy to run speculatively.
pub(crate) async fn any_owned_objects_probe<B: SearchBackend>(
    ctx: &SearchContext<B>,
    query: &str,
) -> Option<SearchResult> {
    let address = Address::try_standardize(query)?;

    match swallow("owned-objects", ctx.backend.owns_any_objects(&address).await) {
        Some(true) => Some(SearchResult::new(
            format!("Address {address}"),
            format!("/account/{address}"),
        )),
        _ => None,
    }
}
