// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Loading an [`IpamContext`] from disk.
//!
//! Context files are YAML (`.yaml`, `.yml`) or JSON (`.json`). Any other
//! extension is parsed as YAML, which also accepts JSON documents.
//!
//! The grid patterns can be overridden from the environment:
//! - `IBPATTERN_HOST_NAME_PATTERN` replaces `grid_config.default_host_name_pattern`
//! - `IBPATTERN_DOMAIN_NAME_PATTERN` replaces `grid_config.default_domain_name_pattern`
//!
//! # Example
//!
//! ```yaml
//! network:
//!   id: network-id
//!   name: test-net-1
//!   tenant_id: tenant-id
//! subnet:
//!   id: subnet-id
//!   name: test-sub-1
//!   tenant_id: tenant-id
//!   network_id: network-id
//! grid_config:
//!   default_host_name_pattern: "host-{ip_address}"
//!   default_domain_name_pattern: "{subnet_id}.infoblox.com"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::constants::{ENV_DOMAIN_NAME_PATTERN, ENV_HOST_NAME_PATTERN};
use crate::context::IpamContext;

/// Supported context file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML document
    Yaml,
    /// JSON document
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension. Defaults to YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse a context document.
///
/// # Errors
///
/// Returns an error if the document is not valid for the given format or does
/// not describe an [`IpamContext`].
pub fn parse_context(contents: &str, format: ConfigFormat) -> Result<IpamContext> {
    match format {
        ConfigFormat::Json => {
            serde_json::from_str(contents).context("Failed to parse JSON IPAM context")
        }
        ConfigFormat::Yaml => {
            serde_yaml::from_str(contents).context("Failed to parse YAML IPAM context")
        }
    }
}

/// Read a context file and apply environment overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_context(path: &Path) -> Result<IpamContext> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read IPAM context file {}", path.display()))?;

    let format = ConfigFormat::from_path(path);
    debug!("Parsing {} as {:?}", path.display(), format);

    let mut ctx = parse_context(&contents, format)
        .with_context(|| format!("Invalid IPAM context file {}", path.display()))?;
    apply_env_overrides(&mut ctx);

    info!(
        "Loaded IPAM context for network {} / subnet {}",
        ctx.network.id, ctx.subnet.id
    );
    Ok(ctx)
}

/// Apply pattern overrides from the process environment.
pub fn apply_env_overrides(ctx: &mut IpamContext) {
    apply_overrides(ctx, |key| std::env::var(key).ok());
}

/// Apply pattern overrides from an arbitrary variable source.
///
/// Unset or empty variables leave the configured pattern untouched.
pub fn apply_overrides<F>(ctx: &mut IpamContext, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(pattern) = non_empty(ENV_HOST_NAME_PATTERN) {
        debug!("Host name pattern overridden by {}: {}", ENV_HOST_NAME_PATTERN, pattern);
        ctx.grid_config.default_host_name_pattern = pattern;
    }
    if let Some(pattern) = non_empty(ENV_DOMAIN_NAME_PATTERN) {
        debug!("Domain name pattern overridden by {}: {}", ENV_DOMAIN_NAME_PATTERN, pattern);
        ctx.grid_config.default_domain_name_pattern = pattern;
    }
}
