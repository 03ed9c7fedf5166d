//! Block types for the Aptos blockchain.
//!
//! Aptos blocks are addressed both by height and by the ledger versions they
//! span; a numeric search query may legitimately hit either.

use serde_json::Value;

use super::error::ExplorerError;
use super::transaction::format_timestamp_micros;

// ============================================================================
// Block Info
// ============================================================================

/// Validated block summary returned by the fullnode API.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)] // Public API
pub struct BlockInfo {
    /// Block height.
    pub height: u64,
    /// First ledger version contained in the block.
    pub first_version: u64,
    /// Last ledger version contained in the block.
    pub last_version: u64,
    /// Block hash.
    pub hash: String,
    /// Human-readable timestamp.
    pub timestamp: String,
}

impl BlockInfo {
    /// Parse and validate a block payload.
    ///
    /// The fullnode encodes u64 fields as JSON strings; both string and
    /// number forms are accepted. Payloads missing the height or version
    /// range are rejected rather than defaulted.
    pub fn from_json(json: &Value) -> Result<Self, ExplorerError> {
        let height = super::json_u64(json, "block_height")
            .ok_or_else(|| ExplorerError::parse("block payload missing 'block_height'"))?;
        let first_version = super::json_u64(json, "first_version")
            .ok_or_else(|| ExplorerError::parse("block payload missing 'first_version'"))?;
        let last_version = super::json_u64(json, "last_version")
            .ok_or_else(|| ExplorerError::parse("block payload missing 'last_version'"))?;

        let hash = json["block_hash"].as_str().unwrap_or("").to_string();
        let timestamp =
            format_timestamp_micros(super::json_u64(json, "block_timestamp").unwrap_or(0));

        Ok(Self {
            height,
            first_version,
            last_version,
            hash,
            timestamp,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
