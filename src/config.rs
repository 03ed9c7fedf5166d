//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing the
//! selected network with automatic load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/aptex/config.json`
//! - macOS: `~/Library/Application Support/aptex/config.json`
//! - Windows: `%APPDATA%/aptex/config.json`

use color_eyre::Result;
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::domain::{CustomNetwork, Network, NetworkConfig};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "aptex";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// Serialized to JSON and stored in the user's configuration directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// The currently selected network.
    #[serde(default)]
    pub network: NetworkConfig,
    /// List of user-defined custom networks.
    #[serde(default)]
    pub custom_networks: Vec<CustomNetwork>,
}

impl AppConfig {
    /// Returns the path to the configuration file, creating the
    /// configuration directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be
    /// determined or created.
    fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| eyre!("could not determine the user configuration directory"))?
            .join(APP_NAME);
        fs::create_dir_all(&dir)?;
        Ok(dir.join(CONFIG_FILE))
    }

    /// Load the configuration from disk, falling back to defaults.
    ///
    /// A missing or unreadable file is not an error; the defaults apply.
    #[must_use]
    pub fn load() -> Self {
        let Ok(path) = Self::config_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed config at {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve a network name against built-in networks first, then the
    /// configured custom networks.
    #[must_use]
    pub fn resolve_network(&self, name: &str) -> Option<NetworkConfig> {
        if let Some(network) = Network::from_name(name) {
            return Some(NetworkConfig::BuiltIn(network));
        }
        self.custom_networks
            .iter()
            .find(|custom| custom.name.eq_ignore_ascii_case(name))
            .map(|custom| NetworkConfig::Custom(custom.clone()))
    }
}

// ============================================================================
// Tests
// ============================================================================
