//! ANS (Aptos Name Service) types.
//!
//! ANS provides human-readable `.apt` names for Aptos addresses. A name may
//! have both a registered target address and an owner; search prefers the
//! registered target.

// Record fields are part of the public API but not all used in the application
#![allow(dead_code)]

use serde_json::Value;

use super::Address;

// ============================================================================
// ANS Name
// ============================================================================

/// A resolved ANS name record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnsName {
    /// The full name, e.g. "alice.apt".
    pub name: String,
    /// The address the name points at, if any.
    pub registered_address: Option<Address>,
    /// The address owning the name registration, if any.
    pub owner_address: Option<Address>,
}

impl AnsName {
    /// Parse an ANS record from an API response.
    ///
    /// Address fields are standardized on the way in; malformed addresses
    /// are treated as absent.
    #[must_use]
    pub fn from_json(name: &str, json: &Value) -> Self {
        let registered_address = json["registered_address"]
            .as_str()
            .and_then(Address::try_standardize);
        let owner_address = json["owner_address"]
            .as_str()
            .and_then(Address::try_standardize);

        Self {
            name: name.to_string(),
            registered_address,
            owner_address,
        }
    }

    /// The address a successful name lookup navigates to.
    ///
    /// Prefers the registered target, falls back to the owner.
    #[must_use]
    pub fn primary_address(&self) -> Option<&Address> {
        self.registered_address
            .as_ref()
            .or(self.owner_address.as_ref())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_full() {
        let json = serde_json::json!({
            "registered_address": "0xcafe",
            "owner_address": "0xbeef",
            "expiration_timestamp": 1893456000000u64
        });

        let ans = AnsName::from_json("alice.apt", &json);
        assert_eq!(ans.name, "alice.apt");
        assert!(ans.registered_address.as_ref().unwrap().as_str().ends_with("cafe"));
        assert!(ans.owner_address.as_ref().unwrap().as_str().ends_with("beef"));
        assert_eq!(ans.primary_address(), ans.registered_address.as_ref());
    }

    #[test]
    fn test_primary_address_falls_back_to_owner() {
        let json = serde_json::json!({ "owner_address": "0xbeef" });
        let ans = AnsName::from_json("bob.apt", &json);
        assert!(ans.registered_address.is_none());
        assert_eq!(ans.primary_address(), ans.owner_address.as_ref());
    }

    #[test]
    fn test_no_addresses() {
        let ans = AnsName::from_json("ghost.apt", &serde_json::json!({}));
        assert!(ans.primary_address().is_none());
    }

    #[test]
    fn test_malformed_address_treated_as_absent() {
        let json = serde_json::json!({ "registered_address": "not-an-address" });
        let ans = AnsName::from_json("odd.apt", &json);
        assert!(ans.registered_address.is_none());
    }
}
