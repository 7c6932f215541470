// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ibpattern::config::load_context;
use ibpattern::constants::ENV_LOG_FORMAT;
use ibpattern::pattern::{validate_fqdn, PatternBuilder};
use tracing::{debug, info};

/// Render DNS hostnames and zone names from Infoblox grid naming patterns.
#[derive(Debug, Parser)]
#[command(name = "ibpattern", version, about)]
struct Cli {
    /// IPAM context file (YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the fully qualified hostname for an address
    Hostname {
        /// IP address being registered
        #[arg(long)]
        ip: String,

        /// Instance name bound to the port
        #[arg(long)]
        instance_name: Option<String>,

        /// Neutron port id
        #[arg(long)]
        port_id: Option<String>,

        /// Neutron device owner (e.g. network:floatingip)
        #[arg(long)]
        device_owner: Option<String>,

        /// Neutron device id
        #[arg(long)]
        device_id: Option<String>,

        /// Fail if the rendered name is not a valid DNS name
        #[arg(long)]
        strict: bool,
    },

    /// Print the zone name
    Zone {
        /// Fail if the rendered name is not a valid DNS name
        #[arg(long)]
        strict: bool,
    },

    /// Validate the configured patterns
    Validate,
}

fn init_logging() {
    // Logs go to stderr; stdout carries only the rendered name.
    // Respects RUST_LOG (default: info) and RUST_LOG_FORMAT=json.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var(ENV_LOG_FORMAT).unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }
}

fn check_name(name: String, strict: bool) -> Result<String> {
    if strict {
        validate_fqdn(&name).with_context(|| format!("Rendered name '{name}' is not valid"))?;
    }
    Ok(name)
}

fn run(cli: Cli) -> Result<String> {
    let ctx = load_context(&cli.config)?;
    let builder = PatternBuilder::new(&ctx);

    match cli.command {
        Command::Hostname {
            ip,
            instance_name,
            port_id,
            device_owner,
            device_id,
            strict,
        } => {
            let hostname = builder.get_hostname(
                &ip,
                instance_name.as_deref(),
                port_id.as_deref(),
                device_owner.as_deref(),
                device_id.as_deref(),
            );
            check_name(hostname, strict)
        }
        Command::Zone { strict } => check_name(builder.get_zone_name(), strict),
        Command::Validate => {
            ctx.validate().context("Grid naming patterns are invalid")?;
            info!("Grid naming patterns are valid");
            Ok("ok".to_string())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    debug!("Parsed command line: {:?}", cli);

    let output = run(cli)?;
    println!("{output}");
    Ok(())
}
