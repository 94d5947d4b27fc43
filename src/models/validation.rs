// Adapter Manager - Validation Utilities
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Input validation for configuration requests.

use std::net::Ipv4Addr;
use std::str::FromStr;

use super::error::{Error, Result};

/// Maximum kernel interface name length (IFNAMSIZ minus the NUL).
const MAX_INTERFACE_NAME_LEN: usize = 15;

/// Validate an IPv4 address string.
pub fn validate_ipv4(s: &str) -> Result<Ipv4Addr> {
    Ipv4Addr::from_str(s).map_err(|_| Error::InvalidIpAddress(s.to_string()))
}

/// Validate an IPv4 prefix length (0-32).
pub fn validate_prefix_len(prefix: u8) -> Result<u8> {
    if prefix > 32 {
        return Err(Error::InvalidPrefixLength(prefix));
    }
    Ok(prefix)
}

/// Validate a kernel interface name.
///
/// Names are used verbatim in command argument vectors and in the derived
/// connection-profile name, so only plain identifier characters pass.
pub fn validate_interface_name(s: &str) -> Result<&str> {
    if s.is_empty() || s.len() > MAX_INTERFACE_NAME_LEN {
        return Err(Error::InvalidInterfaceName(s.to_string()));
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
    {
        return Err(Error::InvalidInterfaceName(s.to_string()));
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ipv4() {
        assert!(validate_ipv4("10.0.0.5").is_ok());
        assert!(validate_ipv4("192.168.1.1").is_ok());
        assert!(validate_ipv4("10.0.0.256").is_err());
        assert!(validate_ipv4("not-an-ip").is_err());
        assert!(validate_ipv4("").is_err());
    }

    #[test]
    fn test_validate_prefix_len() {
        assert!(validate_prefix_len(0).is_ok());
        assert!(validate_prefix_len(24).is_ok());
        assert!(validate_prefix_len(32).is_ok());
        assert!(validate_prefix_len(33).is_err());
    }

    #[test]
    fn test_validate_interface_name() {
        assert!(validate_interface_name("eth1").is_ok());
        assert!(validate_interface_name("enp3s0").is_ok());
        assert!(validate_interface_name("usb0").is_ok());
        assert!(validate_interface_name("").is_err());
        assert!(validate_interface_name("eth1; rm -rf /").is_err());
        assert!(validate_interface_name("averyverylonginterfacename").is_err());
    }
}
