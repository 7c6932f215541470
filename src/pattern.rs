// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Hostname and zone name generation from grid naming patterns.
//!
//! The IPAM driver registers every allocated address in DNS. The names it uses
//! come from templates configured on the grid, for example `host-{ip_address}`
//! for hosts and `{subnet_id}.infoblox.com` for zones. This module fills those
//! templates from an [`IpamContext`].
//!
//! # Substitution rules
//!
//! - Substitution is literal: each recognized `{placeholder}` is replaced by its
//!   value, anything else (including unknown placeholders) is copied verbatim.
//! - IP addresses and instance names are sanitized first: every `.` and `:`
//!   becomes `-` so the value is usable as a single DNS label.
//! - Ports owned by well known Neutron services (DHCP, routers, floating IPs,
//!   load balancers) get a fixed per-owner pattern instead of the grid default.
//!
//! # Example
//!
//! ```rust
//! use ibpattern::context::{GridConfig, IpamContext, NetworkInfo, SubnetInfo};
//! use ibpattern::pattern::PatternBuilder;
//!
//! let ctx = IpamContext {
//!     network: NetworkInfo { id: "network-id".into(), name: "test-net-1".into(), ..Default::default() },
//!     subnet: SubnetInfo { id: "subnet-id".into(), name: "test-sub-1".into(), ..Default::default() },
//!     grid_config: GridConfig {
//!         default_host_name_pattern: "host-{ip_address}".into(),
//!         default_domain_name_pattern: "{subnet_id}.infoblox.com".into(),
//!         ..Default::default()
//!     },
//!     user_id: None,
//! };
//!
//! let builder = PatternBuilder::new(&ctx);
//! assert_eq!(builder.get_zone_name(), "subnet-id.infoblox.com");
//! assert_eq!(
//!     builder.get_hostname("11.11.11.11", None, None, Some("network:floatingip"), None),
//!     "floating-ip-11-11-11-11.subnet-id.infoblox.com"
//! );
//! ```

use std::borrow::Cow;
use std::net::Ipv4Addr;

use hickory_proto::rr::Name;
use tracing::debug;

use crate::constants::{
    DEVICE_OWNER_DHCP, DEVICE_OWNER_FLOATINGIP, DEVICE_OWNER_LOADBALANCER, DEVICE_OWNER_ROUTER_GW,
    DEVICE_OWNER_ROUTER_INTF, HOST_ONLY_PLACEHOLDERS, IPV4_OCTET_COUNT, MAX_DNS_LABEL_LEN,
    NEUTRON_DEVICE_OWNER_TO_PATTERN_MAP, PATTERN_DHCP_PORT, PATTERN_FLOATING_IP, PATTERN_LB_VIP,
    PATTERN_ROUTER_GW, PATTERN_ROUTER_IFACE, PH_INSTANCE_NAME, PH_IP_OCTET_PREFIX, SANITIZED_CHARS,
    SANITIZE_REPLACEMENT, ZONE_PLACEHOLDERS,
};
use crate::context::IpamContext;
use crate::pattern_errors::PatternError;

/// Neutron services whose ports get a fixed hostname pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceOwner {
    /// DHCP agent port
    Dhcp,
    /// Router interface on a tenant network
    RouterInterface,
    /// Router gateway on an external network
    RouterGateway,
    /// Floating IP
    FloatingIp,
    /// Load balancer VIP
    LoadBalancer,
}

impl DeviceOwner {
    /// Every known device owner, in table order.
    pub const ALL: [DeviceOwner; 5] = [
        DeviceOwner::Dhcp,
        DeviceOwner::RouterInterface,
        DeviceOwner::RouterGateway,
        DeviceOwner::FloatingIp,
        DeviceOwner::LoadBalancer,
    ];

    /// Parse a Neutron `device_owner` string. Unknown or empty owners yield `None`.
    #[must_use]
    pub fn from_neutron(device_owner: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|owner| owner.as_str() == device_owner)
    }

    /// The Neutron `device_owner` string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dhcp => DEVICE_OWNER_DHCP,
            Self::RouterInterface => DEVICE_OWNER_ROUTER_INTF,
            Self::RouterGateway => DEVICE_OWNER_ROUTER_GW,
            Self::FloatingIp => DEVICE_OWNER_FLOATINGIP,
            Self::LoadBalancer => DEVICE_OWNER_LOADBALANCER,
        }
    }

    /// Fixed hostname pattern for this owner.
    #[must_use]
    pub fn hostname_pattern(self) -> &'static str {
        match self {
            Self::Dhcp => PATTERN_DHCP_PORT,
            Self::RouterInterface => PATTERN_ROUTER_IFACE,
            Self::RouterGateway => PATTERN_ROUTER_GW,
            Self::FloatingIp => PATTERN_FLOATING_IP,
            Self::LoadBalancer => PATTERN_LB_VIP,
        }
    }
}

impl std::fmt::Display for DeviceOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the hostname pattern for a raw Neutron device owner string.
#[must_use]
pub fn device_owner_pattern(device_owner: &str) -> Option<&'static str> {
    NEUTRON_DEVICE_OWNER_TO_PATTERN_MAP
        .iter()
        .find(|(owner, _)| *owner == device_owner)
        .map(|(_, pattern)| *pattern)
}

/// Replace every `.` and `:` with `-`.
///
/// ```
/// use ibpattern::pattern::sanitize_label;
///
/// assert_eq!(sanitize_label("11.11.11.11"), "11-11-11-11");
/// assert_eq!(sanitize_label("fd00::1"), "fd00--1");
/// assert_eq!(sanitize_label("test.vm"), "test-vm");
/// ```
#[must_use]
pub fn sanitize_label(value: &str) -> String {
    value.replace(SANITIZED_CHARS, SANITIZE_REPLACEMENT)
}

/// Fill `{name}` placeholders in `pattern` using `lookup`.
///
/// Placeholders that `lookup` does not resolve, and any stray braces, are
/// copied unchanged. Values are inserted once and never rescanned.
fn render<'v, F>(pattern: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<Cow<'v, str>>,
{
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open.find(['{', '}']) {
            Some(close) if after_open.as_bytes()[close] == b'}' => {
                let name = &after_open[..close];
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(&rest[open..open + close + 2]),
                }
                rest = &after_open[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Per-call values available to hostname patterns.
struct HostValues<'a> {
    ip_address: String,
    octets: Option<[u8; IPV4_OCTET_COUNT]>,
    instance_name: String,
    port_id: Option<&'a str>,
    device_id: Option<&'a str>,
}

/// Builds hostnames and zone names from the patterns in an [`IpamContext`].
#[derive(Clone, Copy, Debug)]
pub struct PatternBuilder<'a> {
    ctx: &'a IpamContext,
}

impl<'a> PatternBuilder<'a> {
    /// Create a builder over a context.
    #[must_use]
    pub fn new(ctx: &'a IpamContext) -> Self {
        Self { ctx }
    }

    /// Build the fully qualified hostname for an address.
    ///
    /// Pattern selection:
    /// - Floating IPs use `floating-ip-{ip_address}`, unless an instance name is
    ///   given and the grid host pattern contains `{instance_name}`, in which case
    ///   the grid pattern is used.
    /// - Other known device owners use their fixed pattern.
    /// - Everything else uses the grid host pattern. Without an instance name the
    ///   sanitized IP fills the `{instance_name}` slot.
    ///
    /// The zone from [`Self::get_zone_name`] is appended after a `.`.
    ///
    /// # Arguments
    ///
    /// * `ip_address` - IPv4 or IPv6 address being registered
    /// * `instance_name` - Nova instance name, if the port is bound to one
    /// * `port_id` - Neutron port id
    /// * `device_owner` - Neutron `device_owner` of the port
    /// * `device_id` - Neutron `device_id` of the port (the instance id for VMs)
    #[must_use]
    pub fn get_hostname(
        &self,
        ip_address: &str,
        instance_name: Option<&str>,
        port_id: Option<&str>,
        device_owner: Option<&str>,
        device_id: Option<&str>,
    ) -> String {
        let host_pattern = self.ctx.host_name_pattern();
        let instance_name = instance_name.filter(|name| !name.is_empty());
        let owner = device_owner.and_then(DeviceOwner::from_neutron);

        let pattern = match owner {
            Some(DeviceOwner::FloatingIp)
                if instance_name.is_some() && host_pattern.contains(PH_INSTANCE_NAME) =>
            {
                host_pattern
            }
            Some(owner) => owner.hostname_pattern(),
            None => host_pattern,
        };

        let sanitized_ip = sanitize_label(ip_address);
        let values = HostValues {
            instance_name: instance_name.map_or_else(|| sanitized_ip.clone(), sanitize_label),
            octets: ip_address.parse::<Ipv4Addr>().ok().map(|ip| ip.octets()),
            ip_address: sanitized_ip,
            port_id,
            device_id,
        };

        let host = render(pattern, |name| self.host_value(name, &values));
        let hostname = format!("{host}.{}", self.get_zone_name());

        debug!(
            "Built hostname {} for ip {} (device_owner: {:?}, pattern: {})",
            hostname, ip_address, device_owner, pattern
        );
        hostname
    }

    /// Build the zone name from the grid domain pattern.
    ///
    /// `{subnet_id}`, `{subnet_name}`, `{network_id}`, `{network_name}`,
    /// `{tenant_id}`, `{tenant_name}` and `{user_id}` are substituted. A pattern without
    /// placeholders is returned unchanged as a static zone name.
    #[must_use]
    pub fn get_zone_name(&self) -> String {
        let pattern = self.ctx.domain_name_pattern();
        let zone = render(pattern, |name| self.context_value(name));
        debug!("Built zone name {} from pattern {}", zone, pattern);
        zone
    }

    fn host_value(&self, name: &str, values: &HostValues<'_>) -> Option<Cow<'a, str>> {
        match name {
            "ip_address" => Some(Cow::Owned(values.ip_address.clone())),
            "instance_name" => Some(Cow::Owned(values.instance_name.clone())),
            "port_id" => values.port_id.map(|v| Cow::Owned(v.to_string())),
            "instance_id" => values.device_id.map(|v| Cow::Owned(v.to_string())),
            _ => match name.strip_prefix(PH_IP_OCTET_PREFIX) {
                Some(index) => {
                    let octets = values.octets?;
                    let index: usize = index.parse().ok()?;
                    let octet = octets.get(index.checked_sub(1)?)?;
                    Some(Cow::Owned(octet.to_string()))
                }
                None => self.context_value(name),
            },
        }
    }

    fn context_value(&self, name: &str) -> Option<Cow<'a, str>> {
        let ctx = self.ctx;
        let value: &'a str = match name {
            "subnet_id" => &ctx.subnet.id,
            "subnet_name" => &ctx.subnet.name,
            "network_id" => &ctx.network.id,
            "network_name" => &ctx.network.name,
            "tenant_id" => &ctx.network.tenant_id,
            "tenant_name" => ctx.network.tenant_name.as_deref()?,
            "user_id" => ctx.user_id.as_deref()?,
            _ => return None,
        };
        Some(Cow::Borrowed(value))
    }
}

/// Check that a host name pattern only uses placeholders the builder can fill.
///
/// Rendering itself never fails; this check is meant for configuration time.
///
/// # Errors
///
/// - [`PatternError::EmptyPattern`] for an empty pattern
/// - [`PatternError::ConsecutiveDots`] if the pattern contains `..`
/// - [`PatternError::UnbalancedBraces`] for an unmatched `{` or `}`
/// - [`PatternError::UnknownPlaceholder`] for a placeholder the builder cannot fill
pub fn validate_pattern(pattern: &str) -> Result<(), PatternError> {
    check_pattern(pattern, |name| {
        ZONE_PLACEHOLDERS.contains(&name) || HOST_ONLY_PLACEHOLDERS.contains(&name)
    })
}

/// Check that a domain (zone) name pattern only uses placeholders available
/// to zones.
///
/// Per-address placeholders such as `{ip_address}` or `{port_id}` are
/// rejected since [`PatternBuilder::get_zone_name`] never fills them.
///
/// # Errors
///
/// Same as [`validate_pattern`].
pub fn validate_zone_pattern(pattern: &str) -> Result<(), PatternError> {
    check_pattern(pattern, |name| ZONE_PLACEHOLDERS.contains(&name))
}

fn check_pattern<F>(pattern: &str, is_known: F) -> Result<(), PatternError>
where
    F: Fn(&str) -> bool,
{
    if pattern.trim().is_empty() {
        return Err(PatternError::EmptyPattern);
    }
    if pattern.contains("..") {
        return Err(PatternError::ConsecutiveDots {
            pattern: pattern.to_string(),
        });
    }

    let unbalanced = |position| PatternError::UnbalancedBraces {
        pattern: pattern.to_string(),
        position,
    };

    let mut open: Option<usize> = None;
    for (position, c) in pattern.char_indices() {
        match (c, open) {
            ('{', None) => open = Some(position),
            ('{', Some(start)) => return Err(unbalanced(start)),
            ('}', None) => return Err(unbalanced(position)),
            ('}', Some(start)) => {
                let name = &pattern[start + 1..position];
                if !is_known(name) {
                    return Err(PatternError::UnknownPlaceholder {
                        pattern: pattern.to_string(),
                        placeholder: name.to_string(),
                    });
                }
                open = None;
            }
            _ => {}
        }
    }

    match open {
        Some(start) => Err(unbalanced(start)),
        None => Ok(()),
    }
}

/// Check that a rendered name is a legal DNS name and parse it.
///
/// Labels may contain ASCII letters, digits, `-` and `_`. A single trailing
/// dot is accepted.
///
/// # Errors
///
/// Returns [`PatternError::InvalidCharacter`], [`PatternError::EmptyLabel`],
/// [`PatternError::LabelTooLong`], or [`PatternError::InvalidDnsName`] when the
/// DNS name parser rejects the name.
pub fn validate_fqdn(name: &str) -> Result<Name, PatternError> {
    let relative = name.strip_suffix('.').unwrap_or(name);

    if let Some(character) = relative
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(PatternError::InvalidCharacter {
            name: name.to_string(),
            character,
        });
    }

    for label in relative.split('.') {
        if label.is_empty() {
            return Err(PatternError::EmptyLabel {
                name: name.to_string(),
            });
        }
        if label.len() > MAX_DNS_LABEL_LEN {
            return Err(PatternError::LabelTooLong {
                name: name.to_string(),
                label: label.to_string(),
                max: MAX_DNS_LABEL_LEN,
            });
        }
    }

    Name::from_ascii(name).map_err(|e| PatternError::InvalidDnsName {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
