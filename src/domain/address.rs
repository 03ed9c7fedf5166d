//! Canonical Aptos account addresses.
//!
//! Every address entering the search pipeline is standardized once through
//! [`Address::try_standardize`] and compared in canonical form afterwards.

use serde::{Deserialize, Serialize};

/// Number of hex characters in a canonical address body (32 bytes).
const ADDRESS_HEX_LEN: usize = 64;

// ============================================================================
// Address
// ============================================================================

/// A standardized 32-byte Aptos account address.
///
/// Stored as the canonical lowercase `0x`-prefixed, zero-padded hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Standardize a raw address string into canonical form.
    ///
    /// Accepts an optional `0x` prefix and 1 to 64 hex digits; the result is
    /// lowercased and left-padded with zeros to the full 32-byte width.
    /// Returns `None` for anything else.
    #[must_use]
    pub fn try_standardize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let body = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if body.is_empty() || body.len() > ADDRESS_HEX_LEN {
            return None;
        }
        if !body.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let mut canonical = String::with_capacity(2 + ADDRESS_HEX_LEN);
        canonical.push_str("0x");
        for _ in body.len()..ADDRESS_HEX_LEN {
            canonical.push('0');
        }
        canonical.push_str(&body.to_lowercase());
        Some(Self(canonical))
    }

    /// Build an address directly from 32 raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    /// Decode the address back into its 32 raw bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        // The canonical form is always exactly 64 valid hex digits.
        let _ = hex::decode_to_slice(&self.0[2..], &mut bytes);
        bytes
    }

    /// The canonical `0x…` string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened display form for labels: `0x1234…abcd`.
    #[must_use]
    pub fn truncate(&self) -> String {
        format!("{}\u{2026}{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
