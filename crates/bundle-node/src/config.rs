//! # Node Configuration
//!
//! Command-line arguments and the unified configuration built from them.
//!
//! ## Environment
//!
//! - `BUNDLE_PORT`: HTTP port (default 8080), same as `--port`
//! - `BUNDLE_HOST`: bind address (default 0.0.0.0), same as `--host`
//! - `RUST_LOG`: log filter (default `info`)

use bundle_gateway::{GatewayConfig, HttpConfig};
use bundle_store::StoreConfig;
use clap::Parser;
use std::net::IpAddr;
use std::time::Duration;

/// Command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "bundle-node")]
#[command(version, about = "Ephemeral in-memory store of raw-transaction bundles")]
pub struct Args {
    /// Server port
    #[arg(short, long, env = "BUNDLE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Bind address
    #[arg(long, env = "BUNDLE_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Seconds a bundle lives after creation
    #[arg(long, default_value_t = 600)]
    pub max_age_secs: u64,

    /// Records kept per bundle; the oldest are evicted first
    #[arg(long, default_value_t = 15)]
    pub max_records: usize,

    /// Seconds between expiration sweeps
    #[arg(long, default_value_t = 60)]
    pub sweep_interval_secs: u64,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Bundle store tunables.
    pub store: StoreConfig,
    /// HTTP gateway configuration.
    pub gateway: GatewayConfig,
    /// Logging configuration.
    pub log: LogConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// JSON output instead of human-readable lines.
    pub json: bool,
}

impl From<Args> for NodeConfig {
    fn from(args: Args) -> Self {
        Self {
            store: StoreConfig {
                max_age: Duration::from_secs(args.max_age_secs),
                max_records: args.max_records,
                sweep_interval: Duration::from_secs(args.sweep_interval_secs),
            },
            gateway: GatewayConfig {
                http: HttpConfig {
                    host: args.host,
                    port: args.port,
                },
                ..GatewayConfig::default()
            },
            log: LogConfig {
                json: args.log_json,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_store_defaults() {
        let args = Args::try_parse_from(["bundle-node"]).unwrap();
        let config = NodeConfig::from(args);

        assert_eq!(config.store, StoreConfig::default());
        assert!(!config.log.json);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "bundle-node",
            "--port",
            "9000",
            "--host",
            "127.0.0.1",
            "--max-records",
            "3",
            "--max-age-secs",
            "30",
            "--sweep-interval-secs",
            "5",
            "--log-json",
        ])
        .unwrap();
        let config = NodeConfig::from(args);

        assert_eq!(config.gateway.http_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.store.max_records, 3);
        assert_eq!(config.store.max_age, Duration::from_secs(30));
        assert_eq!(config.store.sweep_interval, Duration::from_secs(5));
        assert!(config.log.json);
    }

    #[test]
    fn test_bad_port_rejected() {
        assert!(Args::try_parse_from(["bundle-node", "--port", "not-a-port"]).is_err());
    }
}
