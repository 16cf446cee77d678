//! # Bundle Node
//!
//! Wires the bundle store, its expiration sweeper and the HTTP gateway into
//! one process.
//!
//! ## Startup Sequence
//!
//! 1. Parse CLI/env configuration
//! 2. Install the tracing subscriber
//! 3. Validate configuration and build the store
//! 4. Spawn the sweeper
//! 5. Serve HTTP until the shutdown signal
//! 6. Stop the sweeper
//!
//! State is not persisted, so shutdown has nothing to flush.

pub mod config;
pub mod telemetry;

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use bundle_gateway::BundleGatewayService;
use bundle_store::{BundleStore, Sweeper};
use tokio::net::TcpListener;
use tracing::info;

pub use config::{Args, LogConfig, NodeConfig};

/// The node runtime owning the store.
pub struct BundleNode {
    config: NodeConfig,
    store: Arc<BundleStore>,
}

impl BundleNode {
    /// Validates configuration and creates an empty store.
    pub fn new(config: NodeConfig) -> Result<Self> {
        config
            .gateway
            .validate()
            .context("invalid gateway configuration")?;

        let store = BundleStore::try_new(config.store.clone())
            .context("invalid store configuration")?;
        let store = Arc::new(store);

        Ok(Self { config, store })
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    pub fn store(&self) -> Arc<BundleStore> {
        Arc::clone(&self.store)
    }

    /// Binds the configured address and runs until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.gateway.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        self.run_on(listener, shutdown).await
    }

    /// Runs on an already bound listener until `shutdown` resolves.
    pub async fn run_on<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(
            max_records = self.config.store.max_records,
            max_age_secs = self.config.store.max_age.as_secs(),
            sweep_interval_secs = self.config.store.sweep_interval.as_secs(),
            "Starting bundle node"
        );

        let sweeper = Sweeper::spawn(self.store.clone(), self.config.store.sweep_interval);

        let gateway = BundleGatewayService::new(self.config.gateway.clone(), self.store.clone())
            .context("failed to create gateway")?;
        let served = gateway
            .serve_on(listener, shutdown)
            .await
            .context("HTTP server failed");

        sweeper.stop().await;
        info!("Shutdown complete");

        served
    }
}
