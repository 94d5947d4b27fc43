// Adapter Manager - Library Root
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! # Adapter Manager
//!
//! Discovery, classification and static-IPv4 configuration of Ethernet
//! adapters on a Linux host, built for boards that drive banks of USB
//! Ethernet dongles (e.g. a Raspberry Pi feeding LED controllers). The
//! web dashboard and DHCP-reservation service consume this crate and
//! serialize its records as-is.
//!
//! - [`catalog::AdapterCatalog`]: enumerate adapters and classify
//!   built-in vs. removable ones
//! - [`configurator::ConnectionConfigurator`]: idempotent
//!   create-or-modify-then-activate of a `<interface>-static`
//!   NetworkManager profile
//! - [`status::ServiceStatusProbe`]: is NetworkManager running
//!
//! ## Design Principles
//!
//! 1. **One seam to the host**: every external command goes through
//!    [`command::CommandRunner`], so logic is testable against scripted
//!    output.
//! 2. **Partial data over no data**: command failures and parse misses
//!    degrade to absent fields, never abort an enumeration.
//! 3. **Fresh snapshots**: enumeration caches nothing across calls.
//!
//! Everything here is synchronous and blocking. Enumeration is read-only
//! and safe to run concurrently, but concurrent configuration of the same
//! interface races at the NetworkManager level — callers must serialize
//! those requests.

pub mod catalog;
pub mod command;
pub mod configurator;
pub mod models;
pub mod parser;
pub mod status;

// Re-export main types for convenience
pub use catalog::AdapterCatalog;
pub use command::{CommandOutput, CommandRunner, SystemCommandRunner};
pub use configurator::ConnectionConfigurator;
pub use models::{AdapterRecord, Error, ManagerConfig, Result};
pub use status::ServiceStatusProbe;
