//! Bundle Gateway - HTTP interface to the bundle store.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    BUNDLE GATEWAY                        │
//! ├──────────────────────────────────────────────────────────┤
//! │   /bundle  (GET, POST, DELETE, OPTIONS)    /health       │
//! │        │                                      │          │
//! │  ┌─────┴──────────────────────────────────────┴──────┐   │
//! │  │  Middleware: CORS headers → CORS preflight →      │   │
//! │  │              Trace → Body limit                   │   │
//! │  └─────────────────────┬─────────────────────────────┘   │
//! │                        │                                 │
//! │  ┌─────────────────────┴─────────────────────────────┐   │
//! │  │  Handler: validate id / rawTx → BundleApi call    │   │
//! │  └─────────────────────┬─────────────────────────────┘   │
//! └────────────────────────┼─────────────────────────────────┘
//!                          │
//!                   Arc<dyn BundleApi>
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use bundle_gateway::{BundleGatewayService, GatewayConfig};
//!
//! let store = Arc::new(BundleStore::new(StoreConfig::default()));
//! let service = BundleGatewayService::new(GatewayConfig::default(), store)?;
//! service.serve(shutdown_signal()).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod handler;
pub mod middleware;
pub mod service;

pub use domain::config::{ConfigError, CorsConfig, GatewayConfig, HttpConfig, LimitsConfig};
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use domain::types::{BundleResponse, TransactionRequest};
pub use service::BundleGatewayService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
