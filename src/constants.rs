// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for DNS name patterns.
//!
//! This module contains the Neutron device-owner strings, the placeholder names
//! understood by [`crate::pattern::PatternBuilder`], and the default patterns.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// Neutron Device Owners
// ============================================================================

/// Device owner for DHCP agent ports
pub const DEVICE_OWNER_DHCP: &str = "network:dhcp";

/// Device owner for router interface ports
pub const DEVICE_OWNER_ROUTER_INTF: &str = "network:router_interface";

/// Device owner for router gateway ports
pub const DEVICE_OWNER_ROUTER_GW: &str = "network:router_gateway";

/// Device owner for floating IP ports
pub const DEVICE_OWNER_FLOATINGIP: &str = "network:floatingip";

/// Device owner for load balancer VIP ports
pub const DEVICE_OWNER_LOADBALANCER: &str = "neutron:LOADBALANCER";

// ============================================================================
// Device Owner Hostname Patterns
// ============================================================================

/// Hostname pattern for DHCP ports
pub const PATTERN_DHCP_PORT: &str = "dhcp-port-{ip_address}";

/// Hostname pattern for router interfaces
pub const PATTERN_ROUTER_IFACE: &str = "router-iface-{ip_address}";

/// Hostname pattern for router gateways
pub const PATTERN_ROUTER_GW: &str = "router-gw-{ip_address}";

/// Hostname pattern for floating IPs
pub const PATTERN_FLOATING_IP: &str = "floating-ip-{ip_address}";

/// Hostname pattern for load balancer VIPs
pub const PATTERN_LB_VIP: &str = "lb-vip-{ip_address}";

/// Static device owner → hostname pattern table.
pub const NEUTRON_DEVICE_OWNER_TO_PATTERN_MAP: &[(&str, &str)] = &[
    (DEVICE_OWNER_DHCP, PATTERN_DHCP_PORT),
    (DEVICE_OWNER_ROUTER_INTF, PATTERN_ROUTER_IFACE),
    (DEVICE_OWNER_ROUTER_GW, PATTERN_ROUTER_GW),
    (DEVICE_OWNER_FLOATINGIP, PATTERN_FLOATING_IP),
    (DEVICE_OWNER_LOADBALANCER, PATTERN_LB_VIP),
];

// ============================================================================
// Placeholders
// ============================================================================

/// Placeholder for the sanitized IP address
pub const PH_IP_ADDRESS: &str = "{ip_address}";

/// Placeholder for the sanitized instance name
pub const PH_INSTANCE_NAME: &str = "{instance_name}";

/// Prefix of the per-octet IPv4 placeholders (`{ip_address_octet1}` .. `{ip_address_octet4}`)
pub const PH_IP_OCTET_PREFIX: &str = "ip_address_octet";

/// Number of octets in an IPv4 address
pub const IPV4_OCTET_COUNT: usize = 4;

/// Placeholder names (without braces) accepted in domain (zone) patterns
pub const ZONE_PLACEHOLDERS: &[&str] = &[
    "subnet_id",
    "subnet_name",
    "network_id",
    "network_name",
    "tenant_id",
    "tenant_name",
    "user_id",
];

/// Placeholder names (without braces) accepted in host patterns, on top of [`ZONE_PLACEHOLDERS`]
pub const HOST_ONLY_PLACEHOLDERS: &[&str] = &[
    "ip_address",
    "ip_address_octet1",
    "ip_address_octet2",
    "ip_address_octet3",
    "ip_address_octet4",
    "instance_name",
    "instance_id",
    "port_id",
];

// ============================================================================
// Sanitization
// ============================================================================

/// Characters replaced in IP addresses and instance names
pub const SANITIZED_CHARS: &[char] = &['.', ':'];

/// Replacement for sanitized characters
pub const SANITIZE_REPLACEMENT: &str = "-";

// ============================================================================
// Grid Configuration Defaults
// ============================================================================

/// Default host name pattern when the grid does not configure one
pub const DEFAULT_HOST_NAME_PATTERN: &str = "host-{ip_address}";

/// Default domain name pattern when the grid does not configure one
pub const DEFAULT_DOMAIN_NAME_PATTERN: &str = "{subnet_id}.cloud.global.com";

// ============================================================================
// Environment Variables
// ============================================================================

/// Overrides the grid's default host name pattern
pub const ENV_HOST_NAME_PATTERN: &str = "IBPATTERN_HOST_NAME_PATTERN";

/// Overrides the grid's default domain name pattern
pub const ENV_DOMAIN_NAME_PATTERN: &str = "IBPATTERN_DOMAIN_NAME_PATTERN";

/// Selects log output format (`text` or `json`)
pub const ENV_LOG_FORMAT: &str = "RUST_LOG_FORMAT";

// ============================================================================
// DNS Limits
// ============================================================================

/// Maximum length of a single DNS label
pub const MAX_DNS_LABEL_LEN: usize = 63;
