//! Aptos API client for interacting with Aptos networks.
//!
//! This module provides the unified `AptosClient` for making requests to:
//! - the fullnode REST API - for accounts, resources, blocks, transactions
//! - the indexer GraphQL API - for ownership queries
//! - the ANS API - for human-readable address names
//! - the curated coin registry - for coin-list search
//!
//! # Example
//!
//! ```ignore
//! use crate::client::AptosClient;
//! use crate::domain::Network;
//!
//! let client = AptosClient::new(Network::Mainnet)?;
//! let info = client.get_ledger_info().await?;
//! ```

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::domain::{ExplorerError, Network, NetworkConfig, json_u64};

mod accounts;
mod ans;
mod blocks;
mod registry;
mod transactions;


pub use registry::CoinRegistry;

/// Default timeout for API requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Aptos API Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct AptosClient {
    /// The fullnode REST API URL.
    pub(crate) api_url: String,
    /// The indexer GraphQL URL (optional).
    indexer_url: Option<String>,
    /// The ANS API URL (optional, mainnet/testnet only).
    ans_api_url: Option<String>,
    /// The curated coin-list URL (optional).
    coin_list_url: Option<String>,
    /// Optional API gateway key, sent as a bearer token.
    api_key: Option<String>,
    /// HTTP client for requests.
    pub(crate) client: Client,
}

impl AptosClient {
    /// Creates a new client for a built-in network.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::ClientInit` if the HTTP client fails to
    /// initialize (e.g., TLS backend unavailable).
    pub fn new(network: Network) -> Result<Self, ExplorerError> {
        let client = Self::build_http_client()?;

        Ok(Self {
            api_url: network.api_url().to_string(),
            indexer_url: Some(network.indexer_url().to_string()),
            ans_api_url: network.ans_api_url().map(String::from),
            coin_list_url: network.coin_list_url().map(String::from),
            api_key: None,
            client,
        })
    }

    /// Supports both built-in networks and custom user-defined networks.
    ///
    /// # Errors
    ///
    /// Returns `ExplorerError::ClientInit` if the HTTP client fails to initialize.
    pub fn from_config(config: &NetworkConfig) -> Result<Self, ExplorerError> {
        match config {
            NetworkConfig::BuiltIn(network) => Self::new(*network),
            NetworkConfig::Custom(custom) => {
                let client = Self::build_http_client()?;
                Ok(Self {
                    api_url: custom.api_url.clone(),
                    indexer_url: custom.indexer_url.clone(),
                    ans_api_url: custom.ans_api_url.clone(),
                    coin_list_url: custom.coin_list_url.clone(),
                    api_key: custom.api_key.clone(),
                    client,
                })
            }
        }
    }

    /// Build the HTTP client with connection pooling.
    fn build_http_client() -> Result<Client, ExplorerError> {
        Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ExplorerError::client_init(e.to_string()))
    }

    #[must_use]
    #[allow(dead_code)] // Public API
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    #[must_use]
    pub fn ans_api_url(&self) -> Option<&str> {
        self.ans_api_url.as_deref()
    }

    #[must_use]
    pub(crate) fn indexer_url(&self) -> Option<&str> {
        self.indexer_url.as_deref()
    }

    #[must_use]
    pub(crate) fn coin_list_url(&self) -> Option<&str> {
        self.coin_list_url.as_deref()
    }

    #[must_use]
    #[allow(dead_code)] // Public API
    pub fn supports_ans(&self) -> bool {
        self.ans_api_url.is_some()
    }

    pub(crate) fn build_api_request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url).header("accept", "application/json");

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        request
    }

    pub(crate) fn build_post_request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.post(url).header("accept", "application/json");

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        request
    }

    /// Fetch the current ledger info from the fullnode root endpoint.
    ///
    /// Doubles as a connectivity check for the selected network.
    ///
    /// # Errors
    ///
    /// Returns an error if the fullnode is unreachable or the payload is
    /// malformed.
    pub async fn get_ledger_info(&self) -> Result<LedgerInfo, ExplorerError> {
        let response = self.build_api_request(&self.api_url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ExplorerError::http(status, body));
        }

        let json: Value = response.json().await?;
        LedgerInfo::from_json(&json)
    }
}

// ============================================================================
// Ledger Info
// ============================================================================

/// Summary of the ledger state reported by the fullnode root endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerInfo {
    /// Chain id of the connected network.
    pub chain_id: u64,
    /// Latest ledger version.
    pub ledger_version: u64,
    /// Latest block height.
    pub block_height: u64,
}

impl LedgerInfo {
    /// Parse and validate a ledger info payload.
    pub fn from_json(json: &Value) -> Result<Self, ExplorerError> {
        let chain_id = json_u64(json, "chain_id")
            .ok_or_else(|| ExplorerError::parse("ledger info missing 'chain_id'"))?;
        let ledger_version = json_u64(json, "ledger_version")
            .ok_or_else(|| ExplorerError::parse("ledger info missing 'ledger_version'"))?;
        let block_height = json_u64(json, "block_height")
            .ok_or_else(|| ExplorerError::parse("ledger info missing 'block_height'"))?;

        Ok(Self {
            chain_id,
            ledger_version,
            block_height,
        })
    }
}
