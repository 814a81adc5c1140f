//! LanShelf Daemon
//!
//! Serves the local filesystem over HTTP on the LAN.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use daemon::config::Config;
use daemon::{net, server};

/// LanShelf daemon - serves the local filesystem over HTTP on the LAN.
#[derive(Parser, Debug)]
#[command(name = "lanshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind to (overrides config)
    #[arg(short, long)]
    pub bind: Option<IpAddr>,

    /// Default browse directory (overrides config)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging is up so the configured level applies
    let mut config = if let Some(config_path) = &cli.config {
        Config::load(config_path)?
    } else {
        Config::load_default()?
    };

    // Apply environment variable overrides, then CLI flags on top
    config.apply_env_overrides();
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(root) = cli.root {
        config.browse.root = root;
    }

    // Validate configuration
    config.validate()?;

    // Initialize tracing; --verbose takes precedence over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter(cli.verbose))
        .init();

    tracing::info!("LanShelf daemon starting...");
    if let Some(config_path) = &cli.config {
        tracing::info!("Using config file: {:?}", config_path);
    }

    let handle = server::serve(&config).await?;

    let ip = net::local_ip();
    tracing::info!("Browse root: {}", config.browse.root.display());
    tracing::info!("Access at: http://{}:{}", ip, handle.addr().port());
    tracing::warn!("No authentication is configured; anyone on this network can read and modify files");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown signal received, stopping server");
    handle.stop().await;
    tracing::info!("Server stopped");

    Ok(())
}
