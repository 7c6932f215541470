// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # ibpattern - DNS naming patterns for Infoblox IPAM
//!
//! The Infoblox IPAM driver for OpenStack Neutron registers every allocated
//! address in DNS. This library derives the hostnames and zone names it uses
//! from templates configured on the Infoblox grid.
//!
//! ## Modules
//!
//! - [`pattern`] - Hostname and zone name builder
//! - [`context`] - Network, subnet and grid configuration passed to the builder
//! - [`config`] - Loading a context from YAML or JSON files
//! - [`constants`] - Device owners, placeholders and default patterns
//! - [`pattern_errors`] - Pattern and DNS name validation errors
//!
//! ## Example
//!
//! ```rust
//! use ibpattern::context::IpamContext;
//! use ibpattern::pattern::PatternBuilder;
//!
//! let mut ctx = IpamContext::default();
//! ctx.subnet.id = "subnet-id".to_string();
//! ctx.grid_config.default_host_name_pattern = "host-{instance_name}".to_string();
//! ctx.grid_config.default_domain_name_pattern = "{subnet_id}.infoblox.com".to_string();
//!
//! let builder = PatternBuilder::new(&ctx);
//! let hostname = builder.get_hostname("10.0.0.5", Some("web.01"), None, None, None);
//! assert_eq!(hostname, "host-web-01.subnet-id.infoblox.com");
//! ```

pub mod config;
pub mod constants;
pub mod context;
pub mod pattern;
pub mod pattern_errors;
