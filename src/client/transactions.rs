//! Transaction fetching methods for AptosClient.

use serde_json::Value;

use super::AptosClient;
use crate::domain::{ExplorerError, TransactionInfo};

impl AptosClient {
    /// Fetch a transaction by its hash.
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, unexpected HTTP statuses, or
    /// a malformed transaction payload. A missing transaction is `Ok(None)`.
    pub async fn transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionInfo>, ExplorerError> {
        let url = format!("{}/transactions/by_hash/{}", self.api_url, hash);
        self.fetch_transaction(&url).await
    }

    /// Fetch a transaction by its ledger version.
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, unexpected HTTP statuses, or
    /// a malformed transaction payload. A missing transaction is `Ok(None)`.
    pub async fn transaction_by_version(
        &self,
        version: u64,
    ) -> Result<Option<TransactionInfo>, ExplorerError> {
        let url = format!("{}/transactions/by_version/{}", self.api_url, version);
        self.fetch_transaction(&url).await
    }

    async fn fetch_transaction(&self, url: &str) -> Result<Option<TransactionInfo>, ExplorerError> {
        let response = self.build_api_request(url).send().await?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ExplorerError::http(status, body));
        }

        let json: Value = response.json().await?;
        TransactionInfo::from_json(&json).map(Some)
    }
}
