// Adapter Manager - Adapter Catalog
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Network adapter enumeration and classification.
//!
//! Enumerates host interfaces with `ip link show`, attaches per-interface
//! attributes (MAC, IPv4 address/prefix, driver) via further probes, and
//! classifies interfaces as built-in or removable Ethernet.
//!
//! Classification is a naming-convention heuristic, not hardware
//! introspection: an interface counts as removable iff its name is not the
//! configured built-in port and not `wlan0`, and starts with `eth` or
//! `usb`. Known limitation: a renamed USB adapter (e.g. `enx...`) is not
//! picked up.

use tracing::debug;

use crate::command::CommandRunner;
use crate::models::AdapterRecord;
use crate::parser;

/// Wireless interface excluded from the removable list.
const WIRELESS_INTERFACE: &str = "wlan0";

/// Enumerates and classifies host network adapters.
///
/// Every call produces a fresh snapshot; nothing is cached. Underlying
/// command failures yield partial or absent fields rather than aborting
/// the enumeration.
pub struct AdapterCatalog<R: CommandRunner> {
    runner: R,
    builtin_interface: String,
}

impl<R: CommandRunner> AdapterCatalog<R> {
    /// Create a catalog. `builtin_interface` names the host's built-in
    /// Ethernet port (e.g. "eth0" on a Raspberry Pi).
    pub fn new(runner: R, builtin_interface: impl Into<String>) -> Self {
        Self {
            runner,
            builtin_interface: builtin_interface.into(),
        }
    }

    /// List all network adapters except loopback.
    pub fn list_all(&self) -> Vec<AdapterRecord> {
        let output = self.runner.run("ip", &["link", "show"]);

        parser::parse_interface_list(&output.stdout)
            .into_iter()
            .filter(|(name, _)| name != "lo")
            .map(|(name, flags)| {
                let mut record = AdapterRecord::new(name, flags);
                self.probe_details(&mut record);
                record
            })
            .collect()
    }

    /// List only removable (USB) Ethernet adapters.
    pub fn list_removable(&self) -> Vec<AdapterRecord> {
        self.list_all()
            .into_iter()
            .filter(|record| self.is_removable(&record.interface))
            .collect()
    }

    /// Look up one adapter by interface name from a fresh snapshot.
    pub fn describe(&self, interface: &str) -> Option<AdapterRecord> {
        self.list_all()
            .into_iter()
            .find(|record| record.interface == interface)
    }

    /// Removable-adapter naming heuristic.
    fn is_removable(&self, name: &str) -> bool {
        name != self.builtin_interface
            && name != WIRELESS_INTERFACE
            && (name.starts_with("eth") || name.starts_with("usb"))
    }

    /// Populate MAC, IPv4 address/prefix and driver on a record.
    ///
    /// Each probe is independent; a failed one leaves its fields absent.
    fn probe_details(&self, record: &mut AdapterRecord) {
        let link = self.runner.run("ip", &["link", "show", &record.interface]);
        record.mac_address = parser::parse_mac(&link.stdout);

        let addr = self.runner.run("ip", &["addr", "show", &record.interface]);
        if let Some((address, prefix)) = parser::parse_ipv4(&addr.stdout) {
            record.ip_address = Some(address);
            record.subnet_mask = Some(prefix);
        }

        record.driver = self.resolve_driver(&record.interface);
    }

    /// Resolve the kernel driver name via the sysfs symlink, best-effort.
    /// Absence is a normal outcome, not an error.
    fn resolve_driver(&self, interface: &str) -> Option<String> {
        let path = format!("/sys/class/net/{}/device/driver", interface);
        let output = self.runner.run("readlink", &["-f", &path]);
        if !output.ok {
            debug!("No driver symlink for {}", interface);
            return None;
        }
        output
            .stdout
            .trim()
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}
