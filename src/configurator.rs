// Adapter Manager - Connection Configuration
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Static IPv4 configuration of adapters via NetworkManager profiles.
//!
//! Each adapter gets one managed profile named `<interface>-static`. A
//! configure call is an explicit three-step sequence: probe whether the
//! profile exists, create or modify it accordingly, then activate it.
//! There is no rollback — a failure between apply and activate leaves the
//! profile defined but inactive, and the call reports failure.
//!
//! The external profile store is shared host state. This type does not
//! serialize concurrent configure calls for the same interface; callers
//! that run requests in parallel must do that themselves.

use tracing::{error, info};

use crate::command::CommandRunner;
use crate::models::validation;

/// Applies static IPv4 configuration through `nmcli`.
pub struct ConnectionConfigurator<R: CommandRunner> {
    runner: R,
    default_prefix_len: u8,
}

impl<R: CommandRunner> ConnectionConfigurator<R> {
    /// Create a configurator. `default_prefix_len` is used when a
    /// configure call does not supply a prefix length.
    pub fn new(runner: R, default_prefix_len: u8) -> Self {
        Self {
            runner,
            default_prefix_len,
        }
    }

    /// Name of the managed connection profile for an interface.
    pub fn profile_name(interface: &str) -> String {
        format!("{}-static", interface)
    }

    /// Configure `interface` with a static IPv4 address.
    ///
    /// Returns `true` only if the whole probe/apply/activate sequence
    /// succeeded. Calling twice with the same arguments is safe and
    /// converges to the same profile (modify-in-place).
    pub fn configure(&self, interface: &str, ip_address: &str, prefix_len: Option<u8>) -> bool {
        let prefix = prefix_len.unwrap_or(self.default_prefix_len);

        if let Err(e) = validation::validate_interface_name(interface) {
            error!("Rejecting configuration request: {}", e);
            return false;
        }
        if let Err(e) = validation::validate_ipv4(ip_address) {
            error!("Rejecting configuration request for {}: {}", interface, e);
            return false;
        }
        if let Err(e) = validation::validate_prefix_len(prefix) {
            error!("Rejecting configuration request for {}: {}", interface, e);
            return false;
        }

        let name = Self::profile_name(interface);
        let address = format!("{}/{}", ip_address, prefix);

        // Probe: does the managed profile already exist?
        let existing = self.runner.run("nmcli", &["connection", "show", &name]);

        // Apply: modify in place, or create bound to the interface.
        let applied = if !existing.stdout.is_empty() {
            info!("Modifying existing connection: {}", name);
            self.runner.run(
                "nmcli",
                &[
                    "connection",
                    "modify",
                    &name,
                    "ipv4.addresses",
                    &address,
                    "ipv4.method",
                    "manual",
                ],
            )
        } else {
            info!("Creating new connection: {}", name);
            self.runner.run(
                "nmcli",
                &[
                    "connection",
                    "add",
                    "type",
                    "ethernet",
                    "ifname",
                    interface,
                    "con-name",
                    &name,
                    "ipv4.addresses",
                    &address,
                    "ipv4.method",
                    "manual",
                    "connection.autoconnect",
                    "yes",
                ],
            )
        };
        if !applied.ok {
            error!("Failed to configure adapter {}", interface);
            return false;
        }

        // Activate: unconditional, regardless of which branch applied.
        let up = self.runner.run("nmcli", &["connection", "up", &name]);
        if !up.ok {
            // Profile is now defined but inactive; no rollback.
            error!("Failed to activate connection {}", name);
            return false;
        }

        info!("Configured {} with IP {}", interface, address);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::FakeRunner;

    const PROFILE_DETAILS: &str =
        "connection.id:                          eth1-static\nconnection.type:                        802-3-ethernet\n";

    #[test]
    fn test_profile_name() {
        assert_eq!(ConnectionConfigurator::<FakeRunner>::profile_name("eth1"), "eth1-static");
    }

    #[test]
    fn test_absent_profile_takes_create_branch_then_activates() {
        let runner = FakeRunner::new()
            .on_success("nmcli connection show eth1-static", "")
            .on_success(
                "nmcli connection add type ethernet ifname eth1 con-name eth1-static ipv4.addresses 10.0.0.5/24 ipv4.method manual connection.autoconnect yes",
                "Connection 'eth1-static' successfully added.\n",
            )
            .on_success("nmcli connection up eth1-static", "Connection successfully activated\n");
        let configurator = ConnectionConfigurator::new(runner, 24);

        assert!(configurator.configure("eth1", "10.0.0.5", Some(24)));

        let calls = configurator.runner.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls[1].starts_with("nmcli connection add"));
        assert_eq!(calls[2], "nmcli connection up eth1-static");
    }

    #[test]
    fn test_existing_profile_takes_modify_branch_then_activates() {
        let runner = FakeRunner::new()
            .on_success("nmcli connection show eth1-static", PROFILE_DETAILS)
            .on_success(
                "nmcli connection modify eth1-static ipv4.addresses 10.0.0.5/24 ipv4.method manual",
                "",
            )
            .on_success("nmcli connection up eth1-static", "Connection successfully activated\n");
        let configurator = ConnectionConfigurator::new(runner, 24);

        assert!(configurator.configure("eth1", "10.0.0.5", Some(24)));

        let calls = configurator.runner.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls[1].starts_with("nmcli connection modify"));
        assert_eq!(calls[2], "nmcli connection up eth1-static");
    }

    #[test]
    fn test_repeat_configure_converges_on_modify() {
        // Second call with identical arguments sees the profile created by
        // the first and modifies it in place.
        let runner = FakeRunner::new()
            .on_success("nmcli connection show eth1-static", PROFILE_DETAILS)
            .on_success(
                "nmcli connection modify eth1-static ipv4.addresses 10.0.0.5/24 ipv4.method manual",
                "",
            )
            .on_success("nmcli connection up eth1-static", "");
        let configurator = ConnectionConfigurator::new(runner, 24);

        assert!(configurator.configure("eth1", "10.0.0.5", Some(24)));
        assert!(configurator.configure("eth1", "10.0.0.5", Some(24)));

        let calls = configurator.runner.calls();
        assert_eq!(calls.len(), 6);
        assert!(calls[1].starts_with("nmcli connection modify"));
        assert!(calls[4].starts_with("nmcli connection modify"));
    }

    #[test]
    fn test_default_prefix_len_applied() {
        let runner = FakeRunner::new()
            .on_success("nmcli connection show eth1-static", "")
            .on_success(
                "nmcli connection add type ethernet ifname eth1 con-name eth1-static ipv4.addresses 10.0.0.5/24 ipv4.method manual connection.autoconnect yes",
                "",
            )
            .on_success("nmcli connection up eth1-static", "");
        let configurator = ConnectionConfigurator::new(runner, 24);

        assert!(configurator.configure("eth1", "10.0.0.5", None));
    }

    #[test]
    fn test_failed_probe_reads_as_absent_profile() {
        // A failing existence probe yields empty output, which routes to
        // the create branch.
        let runner = FakeRunner::new()
            .on_failure("nmcli connection show eth1-static")
            .on_success(
                "nmcli connection add type ethernet ifname eth1 con-name eth1-static ipv4.addresses 10.0.0.5/24 ipv4.method manual connection.autoconnect yes",
                "",
            )
            .on_success("nmcli connection up eth1-static", "");
        let configurator = ConnectionConfigurator::new(runner, 24);

        assert!(configurator.configure("eth1", "10.0.0.5", Some(24)));
        assert!(configurator.runner.calls()[1].starts_with("nmcli connection add"));
    }

    #[test]
    fn test_apply_failure_reports_false_and_skips_activate() {
        let runner = FakeRunner::new()
            .on_success("nmcli connection show eth1-static", "")
            .on_failure(
                "nmcli connection add type ethernet ifname eth1 con-name eth1-static ipv4.addresses 10.0.0.5/24 ipv4.method manual connection.autoconnect yes",
            );
        let configurator = ConnectionConfigurator::new(runner, 24);

        assert!(!configurator.configure("eth1", "10.0.0.5", Some(24)));
        assert_eq!(configurator.runner.calls().len(), 2);
    }

    #[test]
    fn test_activate_failure_reports_false() {
        // Apply succeeded, activate failed: profile is left defined but
        // inactive and the call reports failure.
        let runner = FakeRunner::new()
            .on_success("nmcli connection show eth1-static", PROFILE_DETAILS)
            .on_success(
                "nmcli connection modify eth1-static ipv4.addresses 10.0.0.5/24 ipv4.method manual",
                "",
            )
            .on_failure("nmcli connection up eth1-static");
        let configurator = ConnectionConfigurator::new(runner, 24);

        assert!(!configurator.configure("eth1", "10.0.0.5", Some(24)));
        assert_eq!(configurator.runner.calls().len(), 3);
    }

    #[test]
    fn test_invalid_inputs_rejected_before_any_command() {
        let configurator = ConnectionConfigurator::new(FakeRunner::new(), 24);

        assert!(!configurator.configure("eth1", "not-an-ip", Some(24)));
        assert!(!configurator.configure("eth1", "10.0.0.5", Some(33)));
        assert!(!configurator.configure("eth1; reboot", "10.0.0.5", Some(24)));
        assert!(configurator.runner.calls().is_empty());
    }
}
