//! btc-data: command line access to the Bitcoin data tools
//!
//! The same tool surface the MCP server exposes, callable directly:
//!
//! ```bash
//! # List every tool
//! btc-data tools
//!
//! # Invoke a tool without arguments
//! btc-data call get_bitcoin_price_usd
//!
//! # Invoke a tool with JSON arguments
//! btc-data call get_info_about_address --input '{"address": "bc1q..."}'
//!
//! # Show resolved upstream configuration
//! btc-data status
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use btc_core::Settings;
use btc_mcp::tools::TOOLS;
use btc_mcp::ToolDispatcher;

#[derive(Parser)]
#[command(
    name = "btc-data",
    author,
    version,
    about = "Read-only Bitcoin network, market, and mining data",
    long_about = "Command line front end for the btc-data tool surface.\n\n\
                  The same tools are served over MCP by btc-data-mcp; this binary invokes\n\
                  them directly for scripting and inspection."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every available tool
    Tools,

    /// Invoke one tool with JSON arguments
    Call {
        /// Tool name, e.g. get_bitcoin_price_usd
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        input: String,
    },

    /// Show the resolved upstream configuration
    Status,
}

fn main() -> Result<()> {
    let Cli { command, json } = Cli::parse();

    match command {
        Commands::Tools => {
            if json {
                let listing: Vec<Value> = TOOLS
                    .iter()
                    .map(|(name, description)| {
                        serde_json::json!({"name": name, "description": description})
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                println!("Available tools:");
                for (name, description) in TOOLS {
                    println!("  {name}");
                    println!("      {description}");
                }
            }
            Ok(())
        }
        Commands::Call { tool, input } => {
            let input: Value = serde_json::from_str(&input)
                .with_context(|| format!("arguments are not valid JSON: {input}"))?;
            let dispatcher = ToolDispatcher::new();
            let response = dispatcher.dispatch(&tool, input);
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
                return Ok(());
            }
            if !response.success {
                bail!(
                    "{}",
                    response.error.as_deref().unwrap_or("tool call failed")
                );
            }
            match response.result.as_str() {
                Some(text) => println!("{text}"),
                None => println!("{}", serde_json::to_string_pretty(&response.result)?),
            }
            Ok(())
        }
        Commands::Status => {
            let settings = Settings::from_env();
            print_status(&settings, json)
        }
    }
}

fn print_status(settings: &Settings, json: bool) -> Result<()> {
    let upstreams = [
        ("mempool.space", &settings.mempool),
        ("coingecko", &settings.coingecko),
        ("blockchain.info", &settings.blockchain),
        ("alternative.me", &settings.alternative),
        ("hiro", &settings.hiro),
    ];

    if json {
        let entries: Vec<Value> = upstreams
            .iter()
            .map(|(name, config)| {
                serde_json::json!({
                    "name": name,
                    "base_url": config.base_url,
                    "connect_timeout_secs": config.connect_timeout.as_secs(),
                    "read_timeout_secs": config.read_timeout.as_secs(),
                    "write_timeout_secs": config.write_timeout.as_secs(),
                    "pool_timeout_secs": config.pool_timeout.as_secs(),
                    "ttl_secs": config.ttl.as_secs(),
                    "max_retries": config.max_retries,
                    "cache_enabled": config.cache_enabled,
                    "retry_enabled": config.retry_enabled,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "upstreams": entries }))?
        );
        return Ok(());
    }

    println!("Upstream configuration:");
    for (name, config) in upstreams {
        println!("  {name}: {}", config.base_url);
        println!(
            "      timeouts {}/{}/{}/{}s (connect/read/write/pool)",
            config.connect_timeout.as_secs(),
            config.read_timeout.as_secs(),
            config.write_timeout.as_secs(),
            config.pool_timeout.as_secs(),
        );
        println!(
            "      ttl {}s, retries {}, cache {}, retry {}",
            config.ttl.as_secs(),
            config.max_retries,
            if config.cache_enabled { "on" } else { "off" },
            if config.retry_enabled { "on" } else { "off" },
        );
    }
    Ok(())
}
