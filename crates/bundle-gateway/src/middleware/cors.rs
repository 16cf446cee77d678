//! CORS middleware.
//!
//! tower-http's `CorsLayer` answers preflight requests but only adds
//! `Access-Control-Allow-Methods` / `-Headers` to OPTIONS replies. Browsers
//! talking to the bundle API expect them on every response, errors
//! included, so two overriding `SetResponseHeaderLayer`s wrap it.

use crate::domain::config::{ConfigError, CorsConfig};
use axum::http::header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer as TowerCorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

/// Create CORS layer from gateway config
pub fn create_cors_layer(config: &CorsConfig) -> TowerCorsLayer {
    let mut cors = TowerCorsLayer::new();

    // Configure origins
    if config.allows_any_origin() {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    // Configure headers
    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    cors.allow_headers(headers)
}

/// Wraps `router` so every response carries the configured CORS headers.
pub fn apply_cors<S>(router: Router<S>, config: &CorsConfig) -> Result<Router<S>, ConfigError>
where
    S: Clone + Send + Sync + 'static,
{
    let methods = config.methods_header()?;
    let headers = config.headers_header()?;

    Ok(router
        .layer(create_cors_layer(config))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            methods,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            headers,
        )))
}
