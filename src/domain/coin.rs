//! Coin registry entries.
//!
//! The curated coin list ships both legacy coins (identified by a struct
//! tag) and fungible assets (identified by a metadata address). Entries are
//! deserialized straight from the registry JSON and kept read-only.

use serde::{Deserialize, Serialize};

// ============================================================================
// Coin Description
// ============================================================================

/// One entry of the curated coin registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CoinDescription {
    /// Full display name, e.g. "Aptos Coin".
    pub name: String,
    /// On-chain symbol, e.g. "APT".
    pub symbol: String,
    /// Registry display symbol, preferred over `symbol` when present.
    pub panora_symbol: Option<String>,
    /// Legacy coin struct tag, e.g. `0x1::aptos_coin::AptosCoin`.
    pub token_address: Option<String>,
    /// Fungible asset metadata address.
    pub fa_address: Option<String>,
    /// Logo image URL.
    pub logo_url: Option<String>,
    /// Registry curation tags; entries without any tag are not searchable.
    pub panora_tags: Vec<String>,
    /// Display-priority ordering; lower sorts first.
    pub panora_index: Option<u64>,
    /// Banned entries are excluded from search entirely.
    pub is_banned: bool,
}

impl CoinDescription {
    /// Symbol used for display, preferring the curated registry symbol.
    #[must_use]
    pub fn display_symbol(&self) -> &str {
        self.panora_symbol
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.symbol)
    }

    /// Sort key for the fixed display-priority ordering.
    ///
    /// Entries without an index sort last.
    #[must_use]
    pub fn order_index(&self) -> u64 {
        self.panora_index.unwrap_or(u64::MAX)
    }

    /// Whether this entry may appear in search results at all.
    ///
    /// Banned entries, tag-less entries, and internal fungible assets are
    /// excluded.
    #[must_use]
    pub fn is_searchable(&self) -> bool {
        !self.is_banned
            && !self.panora_tags.is_empty()
            && !self.panora_tags.iter().any(|tag| tag == "InternalFA")
    }
}

// ============================================================================
// Tests
// ============================================================================
