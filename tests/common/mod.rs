// Common test utilities for integration tests

#![allow(dead_code)]

use std::io::Write;

use ibpattern::context::{GridConfig, IpamContext, NetworkInfo, SubnetInfo};
use tempfile::NamedTempFile;

/// Context matching the fixtures used by the Neutron IPAM driver tests
pub fn test_context(host_pattern: &str, domain_pattern: &str) -> IpamContext {
    IpamContext {
        network: NetworkInfo {
            id: "network-id".to_string(),
            name: "test-net-1".to_string(),
            tenant_id: "tenant-id".to_string(),
            tenant_name: Some("admin".to_string()),
            external: false,
        },
        subnet: SubnetInfo {
            id: "subnet-id".to_string(),
            name: "test-sub-1".to_string(),
            tenant_id: "tenant-id".to_string(),
            network_id: "network-id".to_string(),
        },
        grid_config: GridConfig {
            default_host_name_pattern: host_pattern.to_string(),
            default_domain_name_pattern: domain_pattern.to_string(),
            ..GridConfig::default()
        },
        user_id: Some("user-id".to_string()),
    }
}

/// Write a context to a temporary YAML file
pub fn write_yaml_context(ctx: &IpamContext) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile()?;
    file.write_all(serde_yaml::to_string(ctx)?.as_bytes())?;
    Ok(file)
}

/// Write a context to a temporary JSON file
pub fn write_json_context(ctx: &IpamContext) -> Result<NamedTempFile, Box<dyn std::error::Error>> {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
    file.write_all(serde_json::to_string_pretty(ctx)?.as_bytes())?;
    Ok(file)
}
