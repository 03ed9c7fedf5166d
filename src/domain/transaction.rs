//! Transaction types for the Aptos blockchain.
//!
//! The fullnode returns one JSON shape per transaction kind; the kind is
//! carried as a typed tag here instead of being inferred at use-sites.

use chrono::DateTime;
use serde_json::Value;

use super::error::ExplorerError;

// ============================================================================
// Helper Functions
// ============================================================================

/// Format a microsecond Unix timestamp as a human-readable UTC string.
///
/// Returns "unknown" for the zero timestamp.
#[must_use]
pub fn format_timestamp_micros(micros: u64) -> String {
    if micros == 0 {
        return "unknown".to_string();
    }
    let secs = (micros / 1_000_000) as i64;
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "unknown".to_string(),
    }
}

// ============================================================================
// Transaction Kind
// ============================================================================

/// The kind tag of an Aptos transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransactionKind {
    /// A user-submitted transaction.
    User,
    /// Consensus block metadata.
    BlockMetadata,
    /// A state checkpoint marker.
    StateCheckpoint,
    /// The genesis transaction.
    Genesis,
    /// A validator-produced transaction.
    Validator,
    /// A block epilogue marker.
    BlockEpilogue,
    /// A kind this client does not know; kept tagged, never trusted.
    #[default]
    Unknown,
}

impl TransactionKind {
    /// Parse the `type` field of a transaction payload.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "user_transaction" => Self::User,
            "block_metadata_transaction" => Self::BlockMetadata,
            "state_checkpoint_transaction" => Self::StateCheckpoint,
            "genesis_transaction" => Self::Genesis,
            "validator_transaction" => Self::Validator,
            "block_epilogue_transaction" => Self::BlockEpilogue,
            _ => Self::Unknown,
        }
    }
}

// ============================================================================
// Transaction Info
// ============================================================================

/// Validated transaction summary returned by the fullnode API.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)] // Public API
pub struct TransactionInfo {
    /// Ledger version; absent while a transaction is still pending.
    pub version: Option<u64>,
    /// Transaction hash.
    pub hash: String,
    /// Typed transaction kind.
    pub kind: TransactionKind,
    /// Execution success flag; absent while pending.
    pub success: Option<bool>,
    /// Human-readable timestamp, if committed.
    pub timestamp: Option<String>,
}

impl TransactionInfo {
    /// Parse and validate a transaction payload.
    ///
    /// A payload without a hash is rejected; everything else degrades field
    /// by field (a pending transaction has no version or success flag yet).
    pub fn from_json(json: &Value) -> Result<Self, ExplorerError> {
        let hash = json["hash"]
            .as_str()
            .ok_or_else(|| ExplorerError::parse("transaction payload missing 'hash'"))?
            .to_string();

        let kind = TransactionKind::from_tag(json["type"].as_str().unwrap_or(""));
        let version = super::json_u64(json, "version");
        let success = json["success"].as_bool();
        let timestamp = super::json_u64(json, "timestamp").map(format_timestamp_micros);

        Ok(Self {
            version,
            hash,
            kind,
            success,
            timestamp,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
