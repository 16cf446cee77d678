//! Bundle Gateway service - builds the router and runs the HTTP server.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::handler::{handle_bundle_request, health_check, AppState};
use crate::middleware::apply_cors;
use axum::extract::DefaultBodyLimit;
use axum::routing::{any, get};
use axum::Router;
use bundle_store::BundleApi;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// HTTP front end for a bundle store.
pub struct BundleGatewayService {
    config: GatewayConfig,
    store: Arc<dyn BundleApi>,
}

impl BundleGatewayService {
    /// Create a new gateway over `store`
    pub fn new(config: GatewayConfig, store: Arc<dyn BundleApi>) -> Result<Self, GatewayError> {
        config.validate()?;
        Ok(Self { config, store })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the HTTP router
    pub fn router(&self) -> Result<Router, GatewayError> {
        let state = AppState {
            store: Arc::clone(&self.store),
        };

        let router = Router::new()
            .route("/bundle", any(handle_bundle_request))
            .route("/health", get(health_check))
            .layer(DefaultBodyLimit::max(self.config.limits.max_request_size))
            .layer(TraceLayer::new_for_http());

        Ok(apply_cors(router, &self.config.cors)?.with_state(state))
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| GatewayError::Bind { addr, source })?;
        self.serve_on(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.router()?;
        let addr = listener.local_addr().map_err(GatewayError::Serve)?;
        info!(addr = %addr, "Starting HTTP server");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(GatewayError::Serve)?;

        info!("HTTP server stopped");
        Ok(())
    }
}
