//! Emojicoin market address derivation.
//!
//! Emojicoin markets live at deterministic named-object addresses derived
//! from the emoji symbol itself, so a market can be located without any
//! registry lookup; only its existence must then be verified on-chain.

use sha3::{Digest, Sha3_256};

use super::Address;
use crate::constants::EMOJICOIN_REGISTRY_ADDRESS;

/// Named-object derivation scheme byte appended to the hash input.
const OBJECT_FROM_SEED_SCHEME: u8 = 0xFE;

// ============================================================================
// Emojicoin Market
// ============================================================================

/// A derived emojicoin market and its two coin type tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojicoinMarket {
    /// The market object address.
    pub market_address: Address,
    /// Type tag of the base emojicoin.
    pub coin_type: String,
    /// Type tag of the market's LP coin.
    pub lp_type: String,
}

impl EmojicoinMarket {
    /// Derive the market for an emoji symbol sequence.
    ///
    /// Returns `None` when the registry address constant fails to parse,
    /// which would indicate a build-time defect rather than bad input.
    #[must_use]
    pub fn derive(symbol: &str) -> Option<Self> {
        let registry = Address::try_standardize(EMOJICOIN_REGISTRY_ADDRESS)?;

        let mut hasher = Sha3_256::new();
        hasher.update(registry.to_bytes());
        hasher.update(symbol.as_bytes());
        hasher.update([OBJECT_FROM_SEED_SCHEME]);
        let market_address = Address::from_bytes(hasher.finalize().into());

        let coin_type = format!("{market_address}::coin_factory::Emojicoin");
        let lp_type = format!("{market_address}::coin_factory::EmojicoinLP");

        Some(Self {
            market_address,
            coin_type,
            lp_type,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let a = EmojicoinMarket::derive("\u{1F4A5}").unwrap();
        let b = EmojicoinMarket::derive("\u{1F4A5}").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_symbols_derive_different_markets() {
        let boom = EmojicoinMarket::derive("\u{1F4A5}").unwrap();
        let rocket = EmojicoinMarket::derive("\u{1F680}").unwrap();
        assert_ne!(boom.market_address, rocket.market_address);
    }

    #[test]
    fn test_type_tags_are_anchored_to_the_market() {
        let market = EmojicoinMarket::derive("\u{1F4A5}\u{1F4A5}").unwrap();
        assert_eq!(
            market.coin_type,
            format!("{}::coin_factory::Emojicoin", market.market_address)
        );
        assert_eq!(
            market.lp_type,
            format!("{}::coin_factory::EmojicoinLP", market.market_address)
        );
        assert_eq!(market.market_address.as_str().len(), 66);
    }
}
