// Adapter Manager - Shared Models
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Shared types and models for the adapter manager:
//!
//! - **Adapter**: per-interface enumeration snapshot records
//! - **Config**: host topology and defaults
//! - **Validation**: input checking for configuration requests
//! - **Error**: shared error types

pub mod adapter;
pub mod config;
pub mod error;
pub mod validation;

// Re-export main types for convenience
pub use adapter::AdapterRecord;
pub use config::ManagerConfig;
pub use error::{Error, Result};

/// Crate version.
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/adapter-manager/config.toml";

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "ADAPTER_MANAGER_CONFIG";
