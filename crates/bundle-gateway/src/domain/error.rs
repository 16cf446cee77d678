//! Gateway error types.
//!
//! `ApiError` is what a request handler can fail with; it renders as a
//! plain-text body with the matching HTTP status. `GatewayError` covers
//! startup and serving failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bundle_store::BundleError;

/// Request-level error, rendered as an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or empty bundle id / rawTx
    #[error(transparent)]
    Validation(#[from] BundleError),

    /// Body was not a JSON object with a string `rawTx`
    #[error("invalid request body")]
    InvalidBody(#[source] serde_json::Error),

    /// Method other than GET, POST, DELETE, OPTIONS
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Response could not be encoded
    #[error("failed to encode response")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for failures caused by the client.
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // 405 goes out with an empty body
            Self::MethodNotAllowed => status.into_response(),
            other => (status, format!("{other}\n")).into_response(),
        }
    }
}

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway-level errors (not request-scoped)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),

    /// Server socket bind error
    #[error("server bind error on {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
