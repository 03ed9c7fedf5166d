//! Network configuration for Aptos networks.
//!
//! This module defines the supported Aptos networks and their associated
//! configuration such as fullnode, indexer, and name-service API endpoints.

use serde::{Deserialize, Serialize};

// ============================================================================
// Network Configuration
// ============================================================================

/// Aptos network variants.
///
/// Represents the different Aptos networks that can be connected to,
/// each with its own set of API endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Network {
    /// Aptos mainnet - the production network.
    #[default]
    Mainnet,
    /// Aptos testnet - the test network for development.
    Testnet,
    /// Aptos devnet - reset periodically, for early development.
    Devnet,
    /// A node running on localhost.
    Local,
}

impl Network {
    /// Returns the lowercase name of the network, as used in URLs and telemetry.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
            Self::Local => "local",
        }
    }

    /// Parse a network from its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "mainnet" => Some(Self::Mainnet),
            "testnet" => Some(Self::Testnet),
            "devnet" => Some(Self::Devnet),
            "local" => Some(Self::Local),
            _ => None,
        }
    }

    /// Returns the fullnode REST API URL for this network.
    #[must_use]
    pub const fn api_url(&self) -> &str {
        match self {
            Self::Mainnet => "https://api.mainnet.aptoslabs.com/v1",
            Self::Testnet => "https://api.testnet.aptoslabs.com/v1",
            Self::Devnet => "https://api.devnet.aptoslabs.com/v1",
            Self::Local => "http://127.0.0.1:8080/v1",
        }
    }

    /// Returns the indexer GraphQL URL for this network.
    ///
    /// The indexer answers ownership queries the fullnode API cannot,
    /// at a higher latency.
    #[must_use]
    pub const fn indexer_url(&self) -> &str {
        match self {
            Self::Mainnet => "https://api.mainnet.aptoslabs.com/v1/graphql",
            Self::Testnet => "https://api.testnet.aptoslabs.com/v1/graphql",
            Self::Devnet => "https://api.devnet.aptoslabs.com/v1/graphql",
            Self::Local => "http://127.0.0.1:8090/v1/graphql",
        }
    }

    /// Returns the ANS (Aptos Name Service) API base URL for the network.
    ///
    /// ANS is only available on mainnet and testnet.
    #[must_use]
    pub const fn ans_api_url(&self) -> Option<&str> {
        match self {
            Self::Mainnet => Some("https://www.aptosnames.com/api/mainnet/v1"),
            Self::Testnet => Some("https://www.aptosnames.com/api/testnet/v1"),
            Self::Devnet | Self::Local => None,
        }
    }

    /// Returns the curated coin-list URL for the network.
    ///
    /// Only mainnet has a curated registry; other networks search without one.
    #[must_use]
    pub const fn coin_list_url(&self) -> Option<&str> {
        match self {
            Self::Mainnet => Some(
                "https://raw.githubusercontent.com/PanoraExchange/Aptos-Tokens/main/token-list.json",
            ),
            Self::Testnet | Self::Devnet | Self::Local => None,
        }
    }

    /// Returns whether ANS lookups are supported on this network.
    #[must_use]
    pub const fn supports_ans(&self) -> bool {
        matches!(self, Self::Mainnet | Self::Testnet)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Custom Networks
// ============================================================================

/// A user-defined network with explicit endpoints.
///
/// Stored in the application config alongside the built-in selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomNetwork {
    /// Display name for the network.
    pub name: String,
    /// Fullnode REST API URL.
    pub api_url: String,
    /// Indexer GraphQL URL, if one is available.
    #[serde(default)]
    pub indexer_url: Option<String>,
    /// ANS API base URL, if one is available.
    #[serde(default)]
    pub ans_api_url: Option<String>,
    /// Coin-list URL, if one is available.
    #[serde(default)]
    pub coin_list_url: Option<String>,
    /// API gateway key sent as a bearer token.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Selected network: either a built-in network or a custom one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkConfig {
    /// One of the built-in Aptos networks.
    BuiltIn(Network),
    /// A user-defined network.
    Custom(CustomNetwork),
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::BuiltIn(Network::Mainnet)
    }
}

impl NetworkConfig {
    /// Returns the display name of the selected network.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::BuiltIn(network) => network.as_str(),
            Self::Custom(custom) => &custom.name,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
