//! Block fetching methods for AptosClient.

use serde_json::Value;

use super::AptosClient;
use crate::domain::{BlockInfo, ExplorerError};

impl AptosClient {
    /// Fetch a block by its height.
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, unexpected HTTP statuses, or
    /// a malformed block payload. A missing block is `Ok(None)`.
    pub async fn block_by_height(&self, height: u64) -> Result<Option<BlockInfo>, ExplorerError> {
        let url = format!(
            "{}/blocks/by_height/{}?with_transactions=false",
            self.api_url, height
        );
        self.fetch_block(&url).await
    }

    /// Fetch the block containing a ledger version.
    ///
    /// # Errors
    ///
    /// Returns an error for network failures, unexpected HTTP statuses, or
    /// a malformed block payload. A missing block is `Ok(None)`.
    pub async fn block_by_version(&self, version: u64) -> Result<Option<BlockInfo>, ExplorerError> {
        let url = format!(
            "{}/blocks/by_version/{}?with_transactions=false",
            self.api_url, version
        );
        self.fetch_block(&url).await
    }

    async fn fetch_block(&self, url: &str) -> Result<Option<BlockInfo>, ExplorerError> {
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
        BlockInfo::from_json(&json).map(Some)
    }
}
