//! Shared test utilities and Mother pattern factories.
//!
//! This module provides reusable test fixtures following the Mother
//! pattern, plus a scriptable [`StubBackend`] implementing the search
//! capability trait. Use these helpers to avoid copy-pasting setup code
//! across tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::constants::{FA_METADATA_RESOURCE, OBJECT_CORE_RESOURCE};
use crate::domain::{
    Address, AnsName, BlockInfo, CoinDescription, ExplorerError, TransactionInfo, TransactionKind,
};
use crate::search::SearchBackend;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct JsonMother;

impl JsonMother {
    /// A committed block payload, as the fullnode encodes it.
    #[must_use]
    pub fn block(height: u64) -> Value {
        json!({
            "block_height": height.to_string(),
            "block_hash": "0x014e30aafd9f715ab6262322bf919abebd66d948f6822200dc871cfc1f2ca0dc",
            "block_timestamp": "1704067200000000",
            "first_version": "6540000000",
            "last_version": "6540000012"
        })
    }

    /// A committed user transaction payload.
    #[must_use]
    pub fn user_transaction(version: u64) -> Value {
        json!({
            "type": "user_transaction",
            "version": version.to_string(),
            "hash": "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060",
            "success": true,
            "timestamp": "1704067200000000"
        })
    }

    /// The fullnode root-endpoint ledger info payload.
    #[must_use]
    pub fn ledger_info() -> Value {
        json!({
            "chain_id": 1,
            "epoch": "8012",
            "ledger_version": "6540000012",
            "oldest_ledger_version": "0",
            "ledger_timestamp": "1704067200000000",
            "node_role": "full_node",
            "block_height": "310592466",
            "oldest_block_height": "0"
        })
    }
}

pub struct CoinMother;

impl CoinMother {
    /// A verified legacy coin identified by a struct tag.
    #[must_use]
    pub fn legacy_coin(name: &str, symbol: &str, token_address: &str) -> CoinDescription {
        CoinDescription {
            name: name.to_string(),
            symbol: symbol.to_string(),
            panora_symbol: Some(symbol.to_string()),
            token_address: Some(token_address.to_string()),
            fa_address: None,
            logo_url: Some(format!("https://assets.example.com/{symbol}.svg")),
            panora_tags: vec!["Verified".to_string()],
            panora_index: Some(1),
            is_banned: false,
        }
    }

    /// A verified fungible asset identified by a metadata address.
    #[must_use]
    pub fn fungible_asset(name: &str, symbol: &str, fa_address: &str) -> CoinDescription {
        CoinDescription {
            name: name.to_string(),
            symbol: symbol.to_string(),
            panora_symbol: Some(symbol.to_string()),
            token_address: None,
            fa_address: Some(fa_address.to_string()),
            logo_url: Some(format!("https://assets.example.com/{symbol}.svg")),
            panora_tags: vec!["Verified".to_string()],
            panora_index: Some(10),
            is_banned: false,
        }
    }

    /// A banned entry that must never surface in results.
    #[must_use]
    pub fn banned(name: &str, symbol: &str) -> CoinDescription {
        CoinDescription {
            name: name.to_string(),
            symbol: symbol.to_string(),
            panora_symbol: Some(symbol.to_string()),
            token_address: None,
            fa_address: Some("0x123".to_string()),
            logo_url: None,
            panora_tags: vec!["Meme".to_string()],
            panora_index: Some(500),
            is_banned: true,
        }
    }

    /// An entry without curation tags, excluded from search.
    #[must_use]
    pub fn untagged(name: &str, symbol: &str) -> CoinDescription {
        CoinDescription {
            name: name.to_string(),
            symbol: symbol.to_string(),
            panora_symbol: None,
            token_address: None,
            fa_address: Some("0x456".to_string()),
            logo_url: None,
            panora_tags: Vec::new(),
            panora_index: None,
            is_banned: false,
        }
    }
}

// ============================================================================
// Stub Backend
// ============================================================================

/// A scriptable in-memory [`SearchBackend`].
///
/// Entities are registered through the builder methods; every call is
/// recorded so tests can assert which probes were dispatched and in what
/// order.
#[derive(Debug, Default)]
pub struct StubBackend {
    accounts: HashSet<String>,
    objects: HashSet<String>,
    fungible_assets: HashSet<String>,
    resourceful: HashSet<String>,
    object_owners: HashSet<String>,
    coin_structs: HashSet<String>,
    ans_names: HashMap<String, String>,
    block_heights: HashSet<u64>,
    block_versions: HashMap<u64, u64>,
    txn_versions: HashSet<u64>,
    txn_hashes: HashSet<String>,
    fail_all: bool,
    calls: Mutex<Vec<String>>,
}

impl StubBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an existing account.
    #[must_use]
    pub fn with_account(mut self, address: &str) -> Self {
        self.accounts.insert(Self::canonical(address));
        self
    }

    /// Register an address holding an object-core resource.
    #[must_use]
    pub fn with_object(mut self, address: &str) -> Self {
        self.objects.insert(Self::canonical(address));
        self
    }

    /// Register an address holding fungible-asset metadata.
    #[must_use]
    pub fn with_fungible_asset(mut self, address: &str) -> Self {
        self.fungible_assets.insert(Self::canonical(address));
        self
    }

    /// Register an address that holds at least one resource.
    #[must_use]
    pub fn with_resources(mut self, address: &str) -> Self {
        self.resourceful.insert(Self::canonical(address));
        self
    }

    /// Register an address that owns at least one object.
    #[must_use]
    pub fn with_owned_objects(mut self, address: &str) -> Self {
        self.object_owners.insert(Self::canonical(address));
        self
    }

    /// Register a legacy coin struct tag with an existing coin-info resource.
    #[must_use]
    pub fn with_coin_struct(mut self, struct_tag: &str) -> Self {
        self.coin_structs.insert(struct_tag.to_string());
        self
    }

    /// Register a resolvable ANS name.
    #[must_use]
    pub fn with_ans_name(mut self, name: &str, address: &str) -> Self {
        self.ans_names.insert(name.to_string(), address.to_string());
        self
    }

    /// Register an existing block height.
    #[must_use]
    pub fn with_block_height(mut self, height: u64) -> Self {
        self.block_heights.insert(height);
        self
    }

    /// Register a ledger version contained in a block of the given height.
    #[must_use]
    pub fn with_block_version(mut self, version: u64, height: u64) -> Self {
        self.block_versions.insert(version, height);
        self
    }

    /// Register an existing transaction version.
    #[must_use]
    pub fn with_transaction_version(mut self, version: u64) -> Self {
        self.txn_versions.insert(version);
        self
    }

    /// Register an existing transaction hash.
    #[must_use]
    pub fn with_transaction_hash(mut self, hash: &str) -> Self {
        self.txn_hashes.insert(hash.to_string());
        self
    }

    /// Make every capability call fail.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// The recorded capability calls, in invocation order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn canonical(raw: &str) -> String {
        Address::try_standardize(raw)
            .expect("fixture addresses must standardize")
            .to_string()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self) -> Result<(), ExplorerError> {
        if self.fail_all {
            Err(ExplorerError::parse("stub backend failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SearchBackend for StubBackend {
    async fn account_exists(&self, address: &Address) -> Result<bool, ExplorerError> {
        self.record(format!("account_exists:{address}"));
        self.check()?;
        Ok(self.accounts.contains(address.as_str()))
    }

    async fn resource_exists(
        &self,
        address: &Address,
        resource_type: &str,
    ) -> Result<bool, ExplorerError> {
        self.record(format!("resource_exists:{resource_type}"));
        self.check()?;
        if resource_type == OBJECT_CORE_RESOURCE {
            Ok(self.objects.contains(address.as_str()))
        } else if resource_type == FA_METADATA_RESOURCE {
            Ok(self.fungible_assets.contains(address.as_str()))
        } else if let Some(tag) = resource_type
            .strip_prefix("0x1::coin::CoinInfo<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            Ok(self.coin_structs.contains(tag))
        } else {
            Ok(false)
        }
    }

    async fn has_any_resources(&self, address: &Address) -> Result<bool, ExplorerError> {
        self.record("has_any_resources".to_string());
        self.check()?;
        Ok(self.resourceful.contains(address.as_str()))
    }

    async fn owns_any_objects(&self, address: &Address) -> Result<bool, ExplorerError> {
        self.record("owns_any_objects".to_string());
        self.check()?;
        Ok(self.object_owners.contains(address.as_str()))
    }

    async fn resolve_name(&self, name: &str) -> Result<Option<AnsName>, ExplorerError> {
        self.record(format!("resolve_name:{name}"));
        self.check()?;
        Ok(self.ans_names.get(name).map(|address| AnsName {
            name: name.to_string(),
            registered_address: Address::try_standardize(address),
            owner_address: None,
        }))
    }

    async fn block_by_height(&self, height: u64) -> Result<Option<BlockInfo>, ExplorerError> {
        self.record(format!("block_by_height:{height}"));
        self.check()?;
        Ok(self.block_heights.contains(&height).then(|| BlockInfo {
            height,
            first_version: 0,
            last_version: 0,
            hash: String::new(),
            timestamp: "unknown".to_string(),
        }))
    }

    async fn block_by_version(&self, version: u64) -> Result<Option<BlockInfo>, ExplorerError> {
        self.record(format!("block_by_version:{version}"));
        self.check()?;
        Ok(self.block_versions.get(&version).map(|height| BlockInfo {
            height: *height,
            first_version: version,
            last_version: version,
            hash: String::new(),
            timestamp: "unknown".to_string(),
        }))
    }

    async fn transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionInfo>, ExplorerError> {
        self.record(format!("transaction_by_hash:{hash}"));
        self.check()?;
        Ok(self.txn_hashes.contains(hash).then(|| TransactionInfo {
            version: Some(1),
            hash: hash.to_string(),
            kind: TransactionKind::User,
            success: Some(true),
            timestamp: None,
        }))
    }

    async fn transaction_by_version(
        &self,
        version: u64,
    ) -> Result<Option<TransactionInfo>, ExplorerError> {
        self.record(format!("transaction_by_version:{version}"));
        self.check()?;
        Ok(self.txn_versions.contains(&version).then(|| TransactionInfo {
            version: Some(version),
            hash: format!("0x{version:064x}"),
            kind: TransactionKind::User,
            success: Some(true),
            timestamp: None,
        }))
    }
}
