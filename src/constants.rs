//! Application constants for the aptex search core.
//!
//! This module provides centralized constants for resource type tags,
//! name-service suffixes, and search timing values used throughout the
//! application. Grouping these constants improves maintainability and
//! ensures consistency across the codebase.

use std::time::Duration;

// ============================================================================
// Resource Type Tags
// ============================================================================

/// Resource marking an address as an object.
pub const OBJECT_CORE_RESOURCE: &str = "0x1::object::ObjectCore";

/// Resource marking an address as a fungible asset metadata holder.
pub const FA_METADATA_RESOURCE: &str = "0x1::fungible_asset::Metadata";

/// Build the legacy coin-info resource tag for a coin struct path.
#[must_use]
pub fn coin_info_resource(struct_tag: &str) -> String {
    format!("0x1::coin::CoinInfo<{struct_tag}>")
}

// ============================================================================
// Name Service
// ============================================================================

/// Canonical ANS name suffix.
pub const ANS_SUFFIX: &str = ".apt";

/// Alternate short-name suffix, rewritten to [`ANS_SUFFIX`] before search.
pub const PETRA_SUFFIX: &str = ".petra";

// ============================================================================
// Emojicoin
// ============================================================================

/// Registry address emojicoin market objects are derived from.
pub const EMOJICOIN_REGISTRY_ADDRESS: &str =
    "0xface729284ae5729100b3a9ad7f7cc025ea09739cd6e7252aff0beb53619cafe";

// ============================================================================
// Search Timing
// ============================================================================

/// How long input must be quiet before a search fires.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

// ============================================================================
// Tests
// ============================================================================
