//! Gateway configuration with validation.

use axum::http::{HeaderName, HeaderValue, Method};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Request limits
    pub limits: LimitsConfig,
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_request_size == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_request_size cannot be 0".into(),
            ));
        }

        self.cors.validate()
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 8080)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 8080,
        }
    }
}

/// CORS configuration.
///
/// Every response carries these headers, not just preflight replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins ("*" for all)
    pub allowed_origins: Vec<String>,
    /// Allowed methods
    pub allowed_methods: Vec<String>,
    /// Allowed headers
    pub allowed_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: ["GET", "POST", "DELETE", "OPTIONS"]
                .map(String::from)
                .to_vec(),
            allowed_headers: [
                "Accept",
                "Content-Type",
                "Content-Length",
                "Accept-Encoding",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    /// `Access-Control-Allow-Methods` value, e.g. `GET, POST, DELETE, OPTIONS`.
    pub fn methods_header(&self) -> Result<HeaderValue, ConfigError> {
        HeaderValue::from_str(&self.allowed_methods.join(", "))
            .map_err(|e| ConfigError::InvalidCors(format!("allowed_methods: {e}")))
    }

    /// `Access-Control-Allow-Headers` value.
    pub fn headers_header(&self) -> Result<HeaderValue, ConfigError> {
        HeaderValue::from_str(&self.allowed_headers.join(", "))
            .map_err(|e| ConfigError::InvalidCors(format!("allowed_headers: {e}")))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::InvalidCors(
                "allowed_origins cannot be empty".into(),
            ));
        }
        for origin in self.allowed_origins.iter().filter(|o| *o != "*") {
            HeaderValue::from_str(origin)
                .map_err(|_| ConfigError::InvalidCors(format!("bad origin: {origin}")))?;
        }
        for method in &self.allowed_methods {
            method
                .parse::<Method>()
                .map_err(|_| ConfigError::InvalidCors(format!("bad method: {method}")))?;
        }
        for header in &self.allowed_headers {
            header
                .parse::<HeaderName>()
                .map_err(|_| ConfigError::InvalidCors(format!("bad header: {header}")))?;
        }
        self.methods_header()?;
        self.headers_header()?;
        Ok(())
    }
}

/// Request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Max request body size in bytes (default: 64KB)
    pub max_request_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_request_size: 64 * 1024,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Invalid size or count limit
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
    /// Invalid CORS setting
    #[error("invalid cors: {0}")]
    InvalidCors(String),
}
