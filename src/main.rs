//! Frontier main entry point

use anyhow::Context;
use clap::Parser;
use frontier_api::start_server;
use frontier_config::{Config, ConfigError};
use frontier_core::Workspace;
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "frontier")]
#[command(author = "Frontier Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Transaction reconciliation dashboard", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Override server.host
    #[arg(long)]
    host: Option<String>,

    /// Override server.port
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (mut config, missing_config) = match Config::load(&args.config) {
        Ok(config) => (config, false),
        Err(ConfigError::FileNotFound { .. }) => (Config::default(), true),
        Err(e) => anyhow::bail!("{}", e.to_details()),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.level.as_str()))
        .init();

    if missing_config {
        log::warn!(
            "Config file {} not found, using built-in defaults",
            args.config.display()
        );
    } else {
        log::info!("Config loaded from {}", args.config.display());
    }

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate().map_err(|e| anyhow::anyhow!("{}", e.to_details()))?;

    let rt = Runtime::new().context("Failed to start async runtime")?;
    rt.block_on(start_server(config, Workspace::seeded()))
        .context("Server failed")?;

    Ok(())
}
