// Adapter Manager - Command Execution
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! External command execution behind a narrow, fakeable seam.
//!
//! Every interaction this crate has with the host (ip, nmcli, systemctl,
//! readlink) goes through [`CommandRunner`] so that parsing and
//! classification logic can be tested against scripted output without
//! touching the system.

use std::process::Command;
use tracing::error;

/// Captured result of one external command invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Captured standard output, empty on failure.
    pub stdout: String,
    /// Whether the command ran and exited with status zero.
    pub ok: bool,
}

impl CommandOutput {
    /// A failed invocation: empty output, not ok.
    pub fn failed() -> Self {
        Self {
            stdout: String::new(),
            ok: false,
        }
    }
}

/// Capability for running external commands.
///
/// Implementations must not panic and must not surface process failures
/// as errors — a failed command is reported through [`CommandOutput::ok`].
pub trait CommandRunner {
    /// Run `command` with `args` to completion and capture its output.
    fn run(&self, command: &str, args: &[&str]) -> CommandOutput;
}

/// Runner backed by real host processes (blocking, no timeout).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &str, args: &[&str]) -> CommandOutput {
        match Command::new(command).args(args).output() {
            Ok(output) if output.status.success() => CommandOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                ok: true,
            },
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                error!(
                    "Command failed: {} {}: {}",
                    command,
                    args.join(" "),
                    stderr.trim()
                );
                CommandOutput::failed()
            }
            Err(e) => {
                error!("Command failed to start: {} {}: {}", command, args.join(" "), e);
                CommandOutput::failed()
            }
        }
    }
}
