//! Account and resource existence probes for AptosClient.

use serde_json::Value;

use super::AptosClient;
use crate::domain::{Address, ExplorerError};

impl AptosClient {
    /// Check whether an account exists on-chain.
    ///
    /// # Errors
    ///
    /// Returns an error for network failures or unexpected HTTP statuses;
    /// a plain 404 means "no such account" and is not an error.
    pub async fn account_exists(&self, address: &Address) -> Result<bool, ExplorerError> {
        let url = format!("{}/accounts/{}", self.api_url, address);
        self.existence_request(&url).await
    }

    /// Check whether a specific resource exists at an address.
    ///
    /// # Errors
    ///
    /// Returns an error for network failures or unexpected HTTP statuses.
    pub async fn resource_exists(
        &self,
        address: &Address,
        resource_type: &str,
    ) -> Result<bool, ExplorerError> {
        let url = format!("{}/accounts/{}/resource/{}", self.api_url, address, resource_type);
        self.existence_request(&url).await
    }

    /// Check whether an address holds any resource at all.
    ///
    /// # Errors
    ///
    /// Returns an error for network failures or unexpected HTTP statuses.
    pub async fn has_any_resources(&self, address: &Address) -> Result<bool, ExplorerError> {
        let url = format!("{}/accounts/{}/resources?limit=1", self.api_url, address);

        let response = self.build_api_request(&url).send().await?;

        if response.status().as_u16() == 404 {
            return Ok(false);
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ExplorerError::http(status, body));
        }

        let resources: Value = response.json().await?;
        Ok(resources.as_array().is_some_and(|arr| !arr.is_empty()))
    }

    /// Check whether an address owns any object, via the indexer.
    ///
    /// This is a heavier query than the fullnode existence checks and is
    /// only issued once everything else has come back empty. Networks
    /// without an indexer report no owned objects.
    ///
    /// # Errors
    ///
    /// Returns an error for network failures or a malformed indexer response.
    pub async fn owns_any_objects(&self, address: &Address) -> Result<bool, ExplorerError> {
        let Some(indexer_url) = self.indexer_url() else {
            return Ok(false);
        };

        let body = serde_json::json!({
            "query": "query OwnedObjects($owner: String) { \
                current_objects(where: {owner_address: {_eq: $owner}}, limit: 1) { object_address } \
            }",
            "variables": { "owner": address.as_str() },
        });

        let response = self
            .build_post_request(indexer_url)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(ExplorerError::http(status, text));
        }

        let json: Value = response.json().await?;
        let objects = json["data"]["current_objects"]
            .as_array()
            .ok_or_else(|| ExplorerError::parse("indexer response missing 'current_objects'"))?;

        Ok(!objects.is_empty())
    }

    /// Shared GET-and-check for endpoints where 200 means "exists" and 404
    /// means "does not".
    async fn existence_request(&self, url: &str) -> Result<bool, ExplorerError> {
        let response = self.build_api_request(url).send().await?;

        if response.status().is_success() {
            return Ok(true);
        }
        if response.status().as_u16() == 404 {
            return Ok(false);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(ExplorerError::http(status, body))
    }
}
