// Adapter Manager - Application Configuration
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Application configuration model.
//!
//! Host topology (which interface is the built-in Ethernet port) and
//! defaults are configuration, not constants, so the same binary works on
//! boards with different naming.

use serde::{Deserialize, Serialize};

/// Adapter Manager configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Name of the built-in Ethernet interface excluded from the
    /// removable-adapter list.
    #[serde(default = "default_builtin_interface")]
    pub builtin_interface: String,

    /// Default prefix length for static configuration when the caller
    /// does not supply one.
    #[serde(default = "default_prefix_len")]
    pub default_prefix_len: u8,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_builtin_interface() -> String {
    "eth0".to_string()
}

fn default_prefix_len() -> u8 {
    24
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            builtin_interface: default_builtin_interface(),
            default_prefix_len: default_prefix_len(),
            log_level: default_log_level(),
        }
    }
}

impl ManagerConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, super::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from a TOML file, falling back to defaults if the file does
    /// not exist.
    pub fn load_or_default(path: &std::path::Path) -> Result<Self, super::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), super::Error> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
