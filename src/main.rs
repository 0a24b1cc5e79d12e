//! norm-helpers - Main entry point
//!
//! Runs the MCP server that exposes the normalization helpers as tools
//! over stdio.

use anyhow::Result;
use norm_helpers::{Config, NormHelpersServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let server = NormHelpersServer::new(&config);

    info!("Starting MCP server with stdio transport");
    norm_helpers::server::run_server(server).await?;

    info!("norm-helpers shutdown complete");
    Ok(())
}
