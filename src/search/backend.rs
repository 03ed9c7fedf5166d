//! The capability boundary between the search core and the network.
//!
//! Probes never talk to `AptosClient` directly; they go through
//! [`SearchBackend`] so the pipeline can be driven by a stub in tests and
//! so every probe receives its request context explicitly instead of
//! reading ambient state.

use async_trait::async_trait;

use crate::client::AptosClient;
use crate::domain::{Address, AnsName, BlockInfo, ExplorerError, TransactionInfo};

// ============================================================================
// Search Backend
// ============================================================================

/// Read-only lookups the search pipeline may issue.
///
/// Implementations report absence as `Ok(false)` / `Ok(None)`; errors are
/// reserved for transport and decoding failures. The probe layer treats
/// both identically, but keeping them separate here leaves the distinction
/// observable in logs.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Whether an account exists at the address.
    async fn account_exists(&self, address: &Address) -> Result<bool, ExplorerError>;

    /// Whether a specific resource exists at the address.
    async fn resource_exists(
        &self,
        address: &Address,
        resource_type: &str,
    ) -> Result<bool, ExplorerError>;

    /// Whether the address holds any resource at all.
    async fn has_any_resources(&self, address: &Address) -> Result<bool, ExplorerError>;

    /// Whether the address owns any object (heavier indexer query).
    async fn owns_any_objects(&self, address: &Address) -> Result<bool, ExplorerError>;

    /// Resolve an ANS name; `None` when the name does not resolve.
    async fn resolve_name(&self, name: &str) -> Result<Option<AnsName>, ExplorerError>;

    /// Fetch a block by height; `None` when no such block exists.
    async fn block_by_height(&self, height: u64) -> Result<Option<BlockInfo>, ExplorerError>;

    /// Fetch the block containing a ledger version.
    async fn block_by_version(&self, version: u64) -> Result<Option<BlockInfo>, ExplorerError>;

    /// Fetch a transaction by hash.
    async fn transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionInfo>, ExplorerError>;

    /// Fetch a transaction by ledger version.
    async fn transaction_by_version(
        &self,
        version: u64,
    ) -> Result<Option<TransactionInfo>, ExplorerError>;
}

#[async_trait]
impl SearchBackend for AptosClient {
    async fn account_exists(&self, address: &Address) -> Result<bool, ExplorerError> {
        AptosClient::account_exists(self, address).await
    }

    async fn resource_exists(
        &self,
        address: &Address,
        resource_type: &str,
    ) -> Result<bool, ExplorerError> {
        AptosClient::resource_exists(self, address, resource_type).await
    }

    async fn has_any_resources(&self, address: &Address) -> Result<bool, ExplorerError> {
        AptosClient::has_any_resources(self, address).await
    }

    async fn owns_any_objects(&self, address: &Address) -> Result<bool, ExplorerError> {
        AptosClient::owns_any_objects(self, address).await
    }

    async fn resolve_name(&self, name: &str) -> Result<Option<AnsName>, ExplorerError> {
        AptosClient::resolve_name(self, name).await
    }

    async fn block_by_height(&self, height: u64) -> Result<Option<BlockInfo>, ExplorerError> {
        AptosClient::block_by_height(self, height).await
    }

    async fn block_by_version(&self, version: u64) -> Result<Option<BlockInfo>, ExplorerError> {
        AptosClient::block_by_version(self, version).await
    }

    async fn transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionInfo>, ExplorerError> {
        AptosClient::transaction_by_hash(self, hash).await
    }

    async fn transaction_by_version(
        &self,
        version: u64,
    ) -> Result<Option<TransactionInfo>, ExplorerError> {
        AptosClient::transaction_by_version(self, version).await
    }
}
