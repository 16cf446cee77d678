//! # Bundle Node
//!
//! Entry point for the bundle server. See `bundle_node` for the wiring.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use bundle_node::telemetry::init_tracing;
use bundle_node::{Args, BundleNode, NodeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = NodeConfig::from(Args::parse());

    init_tracing(&config.log)?;

    let node = BundleNode::new(config)?;
    node.run(shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl+C");
        // Without a signal handler, run until killed
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
