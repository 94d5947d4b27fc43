// Adapter Manager - Error Types
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Shared error types.
//!
//! External command failures are deliberately NOT represented here: they
//! degrade to empty output / absent fields / `false` at the call site so
//! that enumeration always returns whatever partial data is available.
//! These errors cover configuration loading and input validation only.

use thiserror::Error;

/// Result type alias for Adapter Manager operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Adapter Manager operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid prefix length: {0} (must be 0-32)")]
    InvalidPrefixLength(u8),

    #[error("Invalid interface name: {0}")]
    InvalidInterfaceName(String),

    #[error("Failed to read configuration: {0}")]
    ConfigReadFailed(String),

    #[error("Failed to write configuration: {0}")]
    ConfigWriteFailed(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParseFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Convert from toml parse errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParseFailed(err.to_string())
    }
}

// Convert from toml serialize errors
impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::ConfigWriteFailed(err.to_string())
    }
}
