// Adapter Manager - Command Output Parsing
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! Parsers for `ip link` / `ip addr` output.
//!
//! Each pattern is treated as a small wire format with explicit "no match"
//! semantics: a miss yields `None` (or skips the line), never an error, so
//! callers always get whatever partial data was recoverable.

use once_cell::sync::Lazy;
use regex::Regex;

/// Interface header line, e.g. `2: eth1: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500`.
static INTERFACE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+:\s+(\w+):\s+<([^>]+)>").expect("valid interface pattern"));

/// MAC token, e.g. `link/ether aa:bb:cc:dd:ee:ff`.
static MAC_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"link/ether\s+([0-9a-f:]+)").expect("valid MAC pattern"));

/// IPv4 token, e.g. `inet 10.0.0.5/24`.
static INET_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"inet\s+(\d+\.\d+\.\d+\.\d+)/(\d+)").expect("valid inet pattern"));

/// Parse `ip link show` output into (interface name, flag tokens) pairs.
///
/// Lines that do not match the interface header shape (continuation lines,
/// headers) are ignored. Order follows the command output.
pub fn parse_interface_list(text: &str) -> Vec<(String, Vec<String>)> {
    text.lines()
        .filter_map(|line| {
            INTERFACE_LINE.captures(line).map(|caps| {
                let name = caps[1].to_string();
                let flags = caps[2].split(',').map(str::to_string).collect();
                (name, flags)
            })
        })
        .collect()
}

/// Extract the first MAC address from `ip link show <iface>` output.
///
/// First match wins; additional `link/ether` lines (e.g. bonded
/// interfaces) are ignored.
pub fn parse_mac(text: &str) -> Option<String> {
    MAC_ADDRESS.captures(text).map(|caps| caps[1].to_string())
}

/// Extract the first IPv4 address and prefix length from
/// `ip addr show <iface>` output.
///
/// Returns (dotted-quad address, prefix length as the printed decimal
/// string). First match wins; secondary addresses are ignored.
pub fn parse_ipv4(text: &str) -> Option<(String, String)> {
    INET_ADDRESS
        .captures(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
}
