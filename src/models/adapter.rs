// Adapter Manager - Adapter Records
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Snapshot record for one detected network adapter.

use serde::{Deserialize, Serialize};

/// One physical or virtual network interface as seen at enumeration time.
///
/// Records are immutable snapshots: each catalog call produces fresh ones
/// and nothing is cached across calls. Optional fields are "unknown", not
/// errors — a probe that failed or found no match leaves them absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterRecord {
    /// Kernel interface name (e.g. "eth1"). Never empty.
    pub interface: String,
    /// Raw kernel flag tokens in reported order (e.g. BROADCAST, UP, LOWER_UP).
    pub flags: Vec<String>,
    /// Administratively up (derived: `UP` present in flags).
    pub up: bool,
    /// Link carrier present (derived: `LOWER_UP` present in flags).
    pub connected: bool,
    /// Lowercase colon-separated MAC address, if reported.
    pub mac_address: Option<String>,
    /// Dotted-quad IPv4 address, if assigned.
    pub ip_address: Option<String>,
    /// Prefix length as a decimal string (e.g. "24"); present iff
    /// `ip_address` is present — both come from one `inet` match.
    pub subnet_mask: Option<String>,
    /// Kernel driver module name, best-effort.
    pub driver: Option<String>,
}

impl AdapterRecord {
    /// Create a record from an interface name and its raw flag tokens,
    /// deriving the up/connected state. Attribute fields start absent.
    pub fn new(interface: impl Into<String>, flags: Vec<String>) -> Self {
        let up = flags.iter().any(|f| f == "UP");
        let connected = flags.iter().any(|f| f == "LOWER_UP");
        Self {
            interface: interface.into(),
            flags,
            up,
            connected,
            mac_address: None,
            ip_address: None,
            subnet_mask: None,
            driver: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_up_and_connected_derived_from_flags() {
        let record =
            AdapterRecord::new("eth1", flags(&["BROADCAST", "MULTICAST", "UP", "LOWER_UP"]));
        assert!(record.up);
        assert!(record.connected);
    }

    #[test]
    fn test_up_without_carrier() {
        let record = AdapterRecord::new("eth1", flags(&["NO-CARRIER", "BROADCAST", "UP"]));
        assert!(record.up);
        assert!(!record.connected);
    }

    #[test]
    fn test_down_interface() {
        let record = AdapterRecord::new("eth2", flags(&["BROADCAST", "MULTICAST"]));
        assert!(!record.up);
        assert!(!record.connected);
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let mut record = AdapterRecord::new("eth1", flags(&["UP"]));
        record.ip_address = Some("10.0.0.5".to_string());
        record.subnet_mask = Some("24".to_string());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["interface"], "eth1");
        assert_eq!(json["up"], true);
        assert_eq!(json["connected"], false);
        assert_eq!(json["ip_address"], "10.0.0.5");
        assert_eq!(json["subnet_mask"], "24");
        assert!(json["mac_address"].is_null());
    }
}
