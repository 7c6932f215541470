// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! IPAM context consumed by the pattern builder.
//!
//! The context is a read-only bag of attributes collected by the IPAM driver
//! before a port or floating IP is registered in DNS:
//! - The Neutron network the address belongs to
//! - The Neutron subnet the address was allocated from
//! - The grid configuration holding the naming patterns
//!
//! A context is immutable for the duration of a naming call. All types derive
//! serde traits so a context can be loaded from a configuration file (see
//! [`crate::config`]).

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DOMAIN_NAME_PATTERN, DEFAULT_HOST_NAME_PATTERN};
use crate::pattern::{validate_pattern, validate_zone_pattern};
use crate::pattern_errors::PatternError;

/// Neutron network attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NetworkInfo {
    /// Network UUID
    pub id: String,

    /// Human readable network name
    #[serde(default)]
    pub name: String,

    /// Owning tenant (project) id
    #[serde(default)]
    pub tenant_id: String,

    /// Owning tenant (project) name, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,

    /// Whether this is an external (`router:external`) network
    #[serde(default)]
    pub external: bool,
}

/// Neutron subnet attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SubnetInfo {
    /// Subnet UUID
    pub id: String,

    /// Human readable subnet name
    #[serde(default)]
    pub name: String,

    /// Owning tenant (project) id
    #[serde(default)]
    pub tenant_id: String,

    /// Network the subnet belongs to
    #[serde(default)]
    pub network_id: String,
}

/// Naming patterns configured on the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GridConfig {
    /// Host name pattern used when no device-owner pattern applies
    #[serde(default = "default_host_name_pattern")]
    pub default_host_name_pattern: String,

    /// Domain (zone) name pattern
    #[serde(default = "default_domain_name_pattern")]
    pub default_domain_name_pattern: String,

    /// Host name pattern for external networks; falls back to the default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_host_name_pattern: Option<String>,

    /// Domain name pattern for external networks; falls back to the default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_domain_name_pattern: Option<String>,
}

fn default_host_name_pattern() -> String {
    DEFAULT_HOST_NAME_PATTERN.to_string()
}

fn default_domain_name_pattern() -> String {
    DEFAULT_DOMAIN_NAME_PATTERN.to_string()
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_host_name_pattern: default_host_name_pattern(),
            default_domain_name_pattern: default_domain_name_pattern(),
            external_host_name_pattern: None,
            external_domain_name_pattern: None,
        }
    }
}

/// Everything the pattern builder needs to name an address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IpamContext {
    /// Network the address belongs to
    pub network: NetworkInfo,

    /// Subnet the address was allocated from
    pub subnet: SubnetInfo,

    /// Grid naming configuration
    #[serde(default)]
    pub grid_config: GridConfig,

    /// Id of the user performing the request, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl IpamContext {
    /// Host name pattern in effect for this context's network.
    ///
    /// External networks use `external_host_name_pattern` when it is configured.
    #[must_use]
    pub fn host_name_pattern(&self) -> &str {
        match &self.grid_config.external_host_name_pattern {
            Some(pattern) if self.network.external => pattern,
            _ => &self.grid_config.default_host_name_pattern,
        }
    }

    /// Domain name pattern in effect for this context's network.
    ///
    /// External networks use `external_domain_name_pattern` when it is configured.
    #[must_use]
    pub fn domain_name_pattern(&self) -> &str {
        match &self.grid_config.external_domain_name_pattern {
            Some(pattern) if self.network.external => pattern,
            _ => &self.grid_config.default_domain_name_pattern,
        }
    }

    /// Validate every pattern configured on the grid.
    ///
    /// # Errors
    ///
    /// Returns the first [`PatternError`] found, checking host patterns before
    /// domain patterns.
    pub fn validate(&self) -> Result<(), PatternError> {
        let grid = &self.grid_config;
        validate_pattern(&grid.default_host_name_pattern)?;
        if let Some(pattern) = &grid.external_host_name_pattern {
            validate_pattern(pattern)?;
        }
        validate_zone_pattern(&grid.default_domain_name_pattern)?;
        if let Some(pattern) = &grid.external_domain_name_pattern {
            validate_zone_pattern(pattern)?;
        }
        Ok(())
    }
}
