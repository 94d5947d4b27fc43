// Adapter Manager - Main Entry Point
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Command-line front end for the adapter manager.
//!
//! Prints the same JSON shapes the web dashboard consumes, which makes
//! the tool usable both for scripting and for debugging a headless box
//! over SSH.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use serde_json::json;

use adapter_manager::models::{CONFIG_PATH_ENV, CRATE_VERSION, DEFAULT_CONFIG_PATH};
use adapter_manager::{
    AdapterCatalog, ConnectionConfigurator, ManagerConfig, ServiceStatusProbe,
    SystemCommandRunner,
};

/// Human-readable application name.
const APP_NAME: &str = "Adapter Manager";

/// Print version information and exit.
fn print_version() {
    println!("{} {}", APP_NAME, CRATE_VERSION);
    println!("Copyright (C) 2026 Christos A. Daggas");
    println!("License: MIT");
    println!();
    println!("USB Ethernet adapter detection and static IPv4 configuration for Linux.");
}

/// Print help information and exit.
fn print_help() {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "adapter-manager".to_string());
    println!("Usage: {} [OPTIONS] COMMAND [ARGS]", program);
    println!();
    println!("USB Ethernet adapter detection and static IPv4 configuration for Linux.");
    println!();
    println!("Commands:");
    println!("  list                              List all network adapters");
    println!("  removable                         List removable (USB) Ethernet adapters");
    println!("  describe <iface>                  Show one adapter");
    println!("  configure <iface> <ip> [prefix]   Apply a static IPv4 address");
    println!("  status                            Show NetworkManager/adapter status");
    println!();
    println!("Options:");
    println!("  -h, --help       Show this help message and exit");
    println!("  -v, --version    Show version information and exit");
    println!("  -d, --debug      Enable debug logging");
    println!();
    println!("Environment variables:");
    println!("  {}   Configuration file path (default {})", CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH);
    println!("  RUST_LOG                 Set log level (trace, debug, info, warn, error)");
}

/// Resolve the configuration file path from the environment.
fn config_path() -> PathBuf {
    env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let mut debug_mode = false;
    let mut positional: Vec<&str> = Vec::new();

    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return ExitCode::SUCCESS;
            }
            "-v" | "--version" => {
                print_version();
                return ExitCode::SUCCESS;
            }
            "-d" | "--debug" => {
                debug_mode = true;
            }
            other => {
                if other.starts_with('-') {
                    eprintln!("Unknown option: {}", other);
                    eprintln!("Try '--help' for more information.");
                    return ExitCode::FAILURE;
                }
                positional.push(other);
            }
        }
    }

    let config = match ManagerConfig::load_or_default(&config_path()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging with appropriate level
    let log_level: tracing::Level = if debug_mode {
        tracing::Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(tracing::Level::INFO)
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting {} v{}", APP_NAME, CRATE_VERSION);

    let runner = SystemCommandRunner;
    let catalog = AdapterCatalog::new(runner, config.builtin_interface.clone());

    match positional.as_slice() {
        ["list"] => {
            print_json(&json!({ "success": true, "adapters": catalog.list_all() }));
            ExitCode::SUCCESS
        }
        ["removable"] => {
            print_json(&json!({ "success": true, "adapters": catalog.list_removable() }));
            ExitCode::SUCCESS
        }
        ["describe", interface] => match catalog.describe(interface) {
            Some(adapter) => {
                print_json(&json!({ "success": true, "adapter": adapter }));
                ExitCode::SUCCESS
            }
            None => {
                print_json(&json!({ "success": false, "error": "Adapter not found" }));
                ExitCode::FAILURE
            }
        },
        ["configure", interface, ip_address, rest @ ..] => {
            let prefix_len = match rest {
                [] => None,
                [prefix] => match prefix.parse::<u8>() {
                    Ok(p) => Some(p),
                    Err(_) => {
                        eprintln!("Invalid prefix length: {}", prefix);
                        return ExitCode::FAILURE;
                    }
                },
                _ => {
                    eprintln!("Too many arguments for 'configure'.");
                    return ExitCode::FAILURE;
                }
            };

            let configurator = ConnectionConfigurator::new(runner, config.default_prefix_len);
            if configurator.configure(interface, ip_address, prefix_len) {
                print_json(&json!({
                    "success": true,
                    "message": format!("Adapter {} configured", interface),
                }));
                ExitCode::SUCCESS
            } else {
                print_json(&json!({ "success": false, "error": "Configuration failed" }));
                ExitCode::FAILURE
            }
        }
        ["status"] => {
            let probe = ServiceStatusProbe::new(runner);
            print_json(&json!({
                "success": true,
                "status": {
                    "networkmanager": probe.is_network_service_active(),
                    "adapters_count": catalog.list_removable().len(),
                },
            }));
            ExitCode::SUCCESS
        }
        [] => {
            eprintln!("No command given.");
            eprintln!("Try '--help' for more information.");
            ExitCode::FAILURE
        }
        other => {
            eprintln!("Unknown command: {}", other.join(" "));
            eprintln!("Try '--help' for more information.");
            ExitCode::FAILURE
        }
    }
}

/// Print a JSON value to stdout, pretty-printed for humans.
fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}
