// Adapter Manager - Service Status Probe
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! NetworkManager service status check.

use crate::command::CommandRunner;

/// systemd unit whose activity gates adapter configuration.
const NETWORK_SERVICE: &str = "NetworkManager";

/// Reports whether the network-management service is active.
pub struct ServiceStatusProbe<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> ServiceStatusProbe<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// True iff `systemctl is-active NetworkManager` exits zero.
    ///
    /// An absent service and a stopped service both report `false`; no
    /// distinction is surfaced.
    pub fn is_network_service_active(&self) -> bool {
        self.runner.run("systemctl", &["is-active", NETWORK_SERVICE]).ok
    }
}
