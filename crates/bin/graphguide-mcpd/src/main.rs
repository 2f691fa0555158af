//! Daemon entry point for the graphguide MCP server.
//!
//! Loads configuration from the command line and environment, loads the
//! guidance catalog, and serves the MCP protocol over stdio and/or streamable
//! HTTP.

mod catalog;
mod config;
mod logging;
mod transport;

use std::sync::Arc;

use tracing::info;

use crate::catalog::build_catalog;
use crate::config::GuidanceConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = GuidanceConfig::from_args()?;
    logging::init(&config.log_filter)?;

    let catalog = Arc::new(build_catalog(&config)?);
    info!(topics = catalog.len(), "guidance catalog ready");

    transport::serve(&config, catalog).await
}
