//! Domain types for the aptex Aptos explorer search core.
//!
//! This module contains the core domain types used throughout the
//! application, including network configuration, addresses, blocks,
//! transactions, coins, ANS names, and emojicoin derivation.
//!
//! # Module Organization
//!
//! - [`error`] - Custom error types for Aptos operations
//! - [`network`] - Network configuration (mainnet, testnet, devnet, local)
//! - [`address`] - Canonical account addresses
//! - [`block`] - Block types and information
//! - [`transaction`] - Transaction types and kind tags
//! - [`coin`] - Coin registry entries
//! - [`ans`] - ANS (Aptos Name Service) types
//! - [`emojicoin`] - Deterministic emojicoin market derivation

use serde_json::Value;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod address;
pub mod ans;
pub mod block;
pub mod coin;
pub mod emojicoin;
pub mod error;
pub mod network;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use address::Address;
pub use ans::AnsName;
pub use block::BlockInfo;
pub use coin::CoinDescription;
pub use emojicoin::EmojicoinMarket;
pub use error::ExplorerError;
pub use network::{CustomNetwork, Network, NetworkConfig};
pub use transaction::{TransactionInfo, TransactionKind, format_timestamp_micros};

// ============================================================================
// Shared JSON Helpers
// ============================================================================

/// Read a u64 field that the fullnode may encode as a string or a number.
#[must_use]
pub(crate) fn json_u64(json: &Value, key: &str) -> Option<u64> {
    let field = json.get(key)?;
    field
        .as_u64()
        .or_else(|| field.as_str().and_then(|s| s.parse::<u64>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_u64_accepts_both_encodings() {
        let json = serde_json::json!({ "a": "42", "b": 42, "c": "nope", "d": null });
        assert_eq!(json_u64(&json, "a"), Some(42));
        assert_eq!(json_u64(&json, "b"), Some(42));
        assert_eq!(json_u64(&json, "c"), None);
        assert_eq!(json_u64(&json, "d"), None);
        assert_eq!(json_u64(&json, "missing"), None);
    }
}
