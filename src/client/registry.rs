//! Curated coin registry fetch and in-memory search.

use super::AptosClient;
use crate::domain::{Address, CoinDescription, ExplorerError};
use crate::labels::fuzzy_label_match;

// ============================================================================
// Coin Registry
// ============================================================================

/// The curated coin list, fetched once per session and searched locally.
#[derive(Debug, Clone, Default)]
pub struct CoinRegistry {
    coins: Vec<CoinDescription>,
}

impl CoinRegistry {
    /// Wrap an already-fetched coin list.
    #[must_use]
    pub fn new(coins: Vec<CoinDescription>) -> Self {
        Self { coins }
    }

    /// An empty registry, for networks without a curated list.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of entries in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// Whether the registry holds no entries.
    #[must_use]
    #[allow(dead_code)] // Public API
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Find registry entries matching a query.
    ///
    /// Matches the name, symbol, or display symbol under the shared fuzzy
    /// rule, the fungible-asset address in standardized form, or the coin
    /// struct tag exactly. Banned, tag-less, and internal entries are
    /// excluded; results come back in the fixed display-priority order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&CoinDescription> {
        let query_lower = query.to_lowercase();
        let query_address = Address::try_standardize(query);

        let mut matches: Vec<&CoinDescription> = self
            .coins
            .iter()
            .filter(|coin| coin.is_searchable())
            .filter(|coin| {
                fuzzy_label_match(&query_lower, &coin.name)
                    || fuzzy_label_match(&query_lower, &coin.symbol)
                    || coin
                        .panora_symbol
                        .as_deref()
                        .is_some_and(|symbol| fuzzy_label_match(&query_lower, symbol))
                    || (query_address.is_some()
                        && coin
                            .fa_address
                            .as_deref()
                            .and_then(Address::try_standardize)
                            == query_address)
                    || coin.token_address.as_deref() == Some(query)
            })
            .collect();

        matches.sort_by_key(|coin| coin.order_index());
        matches
    }
}

impl AptosClient {
    /// Fetch the curated coin list for this network.
    ///
    /// Networks without a curated list get an empty registry.
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, unexpected HTTP statuses, or
    /// a list that fails to deserialize.
    pub async fn fetch_coin_list(&self) -> Result<CoinRegistry, ExplorerError> {
        let Some(url) = self.coin_list_url() else {
            return Ok(CoinRegistry::empty());
        };

        let response = self.build_api_request(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ExplorerError::http(status, body));
        }

        let coins: Vec<CoinDescription> = response.json().await?;
        tracing::debug!("Fetched coin registry with {} entries", coins.len());
        Ok(CoinRegistry::new(coins))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CoinMother;

    fn registry() -> CoinRegistry {
        CoinRegistry::new(vec![
            CoinMother::legacy_coin("Aptos Coin", "APT", "0x1::aptos_coin::AptosCoin"),
            CoinMother::fungible_asset("USD Coin", "USDC", "0xbae207659db88bea0cbead6da0ed00aac12edcdda169e591cd41c94180b46f3b"),
            CoinMother::banned("Scam Coin", "SCAM"),
            CoinMother::untagged("Mystery", "MYS"),
        ])
    }

    #[test]
    fn test_search_by_name_substring() {
        let registry = registry();
        let hits = registry.search("coin");
        let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Aptos Coin", "USD Coin"]);
    }

    #[test]
    fn test_search_by_symbol() {
        let registry = registry();
        let hits = registry.search("usdc");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "USD Coin");
    }

    #[test]
    fn test_search_excludes_banned_and_untagged() {
        let registry = registry();
        assert!(registry.search("scam").is_empty());
        assert!(registry.search("mystery").is_empty());
    }

    #[test]
    fn test_search_by_fa_address_standardized() {
        let registry = registry();
        // Same address, different case than stored.
        let hits =
            registry.search("0xBAE207659DB88BEA0CBEAD6DA0ED00AAC12EDCDDA169E591CD41C94180B46F3B");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "USDC");
    }

    #[test]
    fn test_search_by_exact_struct_tag() {
        let registry = registry();
        let hits = registry.search("0x1::aptos_coin::AptosCoin");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "APT");
    }

    #[test]
    fn test_search_orders_by_priority() {
        let mut apt = CoinMother::legacy_coin("Aptos Coin", "APT", "0x1::aptos_coin::AptosCoin");
        apt.panora_index = Some(1);
        let mut meme = CoinMother::fungible_asset("Aptos Doge", "ADOGE", "0xd09e");
        meme.panora_index = Some(900);
        // Inserted out of priority order on purpose.
        let registry = CoinRegistry::new(vec![meme, apt]);

        let hits = registry.search("aptos");
        assert_eq!(hits[0].symbol, "APT");
        assert_eq!(hits[1].symbol, "ADOGE");
    }

    #[test]
    fn test_short_query_requires_exact_name_or_symbol() {
        let registry = registry();
        assert!(registry.search("ap").is_empty());
        assert_eq!(registry.search("apt").len(), 1);
    }

    #[test]
    fn test_empty_registry() {
        assert!(CoinRegistry::empty().is_empty());
        assert!(CoinRegistry::empty().search("apt").is_empty());
    }
}
