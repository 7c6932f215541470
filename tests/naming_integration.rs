// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Integration tests for hostname and zone naming.
//!
//! These tests load contexts from files the way the driver does, then render
//! names through the public API and the `ibpattern` binary.
//!
//! Run with: cargo test --test naming_integration

mod common;

use std::process::Command;

use ibpattern::config::load_context;
use ibpattern::constants::{
    DEVICE_OWNER_DHCP, DEVICE_OWNER_FLOATINGIP, DEVICE_OWNER_LOADBALANCER,
    DEVICE_OWNER_ROUTER_GW, DEVICE_OWNER_ROUTER_INTF,
};
use ibpattern::pattern::{validate_fqdn, PatternBuilder};

use common::{test_context, write_json_context, write_yaml_context};

const TEST_IP: &str = "11.11.11.11";

// ============================================================================
// Library
// ============================================================================

#[test]
fn test_yaml_context_round_trip_renders_same_names() {
    let ctx = test_context("host-{ip_address}", "{subnet_id}.infoblox.com");
    let file = write_yaml_context(&ctx).unwrap();

    let loaded = load_context(file.path()).unwrap();

    assert_eq!(loaded, ctx);
    let builder = PatternBuilder::new(&loaded);
    assert_eq!(builder.get_zone_name(), "subnet-id.infoblox.com");
    assert_eq!(
        builder.get_hostname(TEST_IP, None, None, Some(DEVICE_OWNER_FLOATINGIP), None),
        "floating-ip-11-11-11-11.subnet-id.infoblox.com"
    );
}

#[test]
fn test_json_context_renders_instance_names() {
    let ctx = test_context("{instance_name}", "{tenant_name}.{network_name}.cloud");
    let file = write_json_context(&ctx).unwrap();

    let loaded = load_context(file.path()).unwrap();
    let builder = PatternBuilder::new(&loaded);

    assert_eq!(
        builder.get_hostname("10.0.0.7", Some("db.primary"), None, Some("compute:nova"), None),
        "db-primary.admin.test-net-1.cloud"
    );
}

#[test]
fn test_every_device_owner_renders_valid_dns_name() {
    let ctx = test_context("host-{ip_address}", "{subnet_id}.infoblox.com");
    let builder = PatternBuilder::new(&ctx);

    let expected = [
        (DEVICE_OWNER_DHCP, "dhcp-port-11-11-11-11"),
        (DEVICE_OWNER_ROUTER_INTF, "router-iface-11-11-11-11"),
        (DEVICE_OWNER_ROUTER_GW, "router-gw-11-11-11-11"),
        (DEVICE_OWNER_FLOATINGIP, "floating-ip-11-11-11-11"),
        (DEVICE_OWNER_LOADBALANCER, "lb-vip-11-11-11-11"),
    ];

    for (owner, host) in expected {
        let hostname = builder.get_hostname(TEST_IP, None, Some("port-id"), Some(owner), None);
        assert_eq!(hostname, format!("{host}.subnet-id.infoblox.com"));
        assert!(validate_fqdn(&hostname).is_ok(), "{hostname} should be valid");
    }
}

// ============================================================================
// Binary
// ============================================================================

fn ibpattern(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_ibpattern"))
        .args(args)
        .env_remove("IBPATTERN_HOST_NAME_PATTERN")
        .env_remove("IBPATTERN_DOMAIN_NAME_PATTERN")
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run ibpattern")
}

#[test]
fn test_cli_prints_hostname() {
    let ctx = test_context("host-{ip_address}", "{subnet_id}.infoblox.com");
    let file = write_yaml_context(&ctx).unwrap();
    let path = file.path().to_str().unwrap();

    let output = ibpattern(&[
        "--config",
        path,
        "hostname",
        "--ip",
        TEST_IP,
        "--device-owner",
        DEVICE_OWNER_FLOATINGIP,
        "--strict",
    ]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "floating-ip-11-11-11-11.subnet-id.infoblox.com"
    );
}

#[test]
fn test_cli_env_override_changes_zone() {
    let ctx = test_context("host-{ip_address}", "{subnet_id}.infoblox.com");
    let file = write_yaml_context(&ctx).unwrap();
    let path = file.path().to_str().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ibpattern"))
        .args(["--config", path, "zone"])
        .env("IBPATTERN_DOMAIN_NAME_PATTERN", "{network_name}.example.org")
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run ibpattern");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "test-net-1.example.org"
    );
}

#[test]
fn test_cli_validate_fails_on_bad_pattern() {
    let ctx = test_context("host-{hostname}", "{subnet_id}.infoblox.com");
    let file = write_yaml_context(&ctx).unwrap();
    let path = file.path().to_str().unwrap();

    let output = ibpattern(&["--config", path, "validate"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_reports_failure_once_on_stderr() {
    let ctx = test_context("host-{ip_address}", "{ip_address}.infoblox.com");
    let file = write_yaml_context(&ctx).unwrap();
    let path = file.path().to_str().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ibpattern"))
        .args(["--config", path, "validate"])
        .env_remove("IBPATTERN_DOMAIN_NAME_PATTERN")
        .env("RUST_LOG", "error")
        .env("RUST_LOG_FORMAT", "json")
        .output()
        .expect("failed to run ibpattern");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.matches("Grid naming patterns are invalid").count(),
        1,
        "stderr: {stderr}"
    );
}
