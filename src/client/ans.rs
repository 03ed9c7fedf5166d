//! ANS (Aptos Name Service) API methods for AptosClient.

use serde_json::Value;

use super::AptosClient;
use crate::constants::ANS_SUFFIX;
use crate::domain::{AnsName, ExplorerError};

impl AptosClient {
    /// Resolve an ANS name to its record.
    ///
    /// The name may be passed with or without the `.apt` suffix. Lookup
    /// failures of any kind (including network errors) resolve to `None`:
    /// a name that cannot be resolved is simply not a search hit.
    ///
    /// # Errors
    ///
    /// Returns an error only if a successful response carries a body that
    /// cannot be decoded as JSON.
    pub async fn resolve_name(&self, name: &str) -> Result<Option<AnsName>, ExplorerError> {
        let Some(ans_url) = self.ans_api_url() else {
            return Ok(None); // ANS not supported on this network
        };

        let base_name = name.strip_suffix(ANS_SUFFIX).unwrap_or(name);
        if base_name.is_empty() {
            return Ok(None);
        }

        let url = format!("{}/name/{}", ans_url, base_name);

        let response = self
            .build_api_request(&url)
            .timeout(std::time::Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => {
                if resp.status().is_success() {
                    let json: Value = resp.json().await?;
                    let record = AnsName::from_json(name, &json);
                    if record.primary_address().is_some() {
                        Ok(Some(record))
                    } else {
                        Ok(None)
                    }
                } else {
                    Ok(None) // Name not found or other errors
                }
            }
            Err(e) => {
                tracing::debug!("ANS lookup for '{name}' failed: {e}");
                Ok(None) // Network errors, treat as not found
            }
        }
    }
}
