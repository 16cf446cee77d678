//! `/bundle` request handling.
//!
//! One handler serves every method so the checks run in a fixed order:
//! OPTIONS short-circuits, then the `id` query parameter is required, then
//! the method is dispatched. Validation happens before any store call.

use crate::domain::error::{ApiError, ApiResult};
use crate::domain::types::{BundleResponse, TransactionRequest};
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bundle_store::{BundleApi, BundleId, RawTx};
use std::sync::Arc;
use tracing::{debug, error};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BundleApi>,
}

/// Entry point for every method on `/bundle`.
pub async fn handle_bundle_request(
    State(state): State<AppState>,
    method: Method,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let result = bundle_id_from_query(query).and_then(|id| dispatch(&state, &method, id, &body));

    match result {
        Ok(response) => response,
        Err(e) => {
            if e.is_client_error() {
                debug!(method = %method, error = %e, "Rejected bundle request");
            } else {
                error!(method = %method, error = ?e, "Bundle request failed");
            }
            e.into_response()
        }
    }
}

/// First `id` value from the query string. Absent, empty, or an unparsable
/// query string all count as missing.
fn bundle_id_from_query(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<BundleId> {
    let raw = query
        .ok()
        .and_then(|Query(pairs)| pairs.into_iter().find(|(k, _)| k == "id"))
        .map(|(_, v)| v)
        .unwrap_or_default();
    Ok(BundleId::parse(raw)?)
}

fn dispatch(state: &AppState, method: &Method, id: BundleId, body: &[u8]) -> ApiResult<Response> {
    match *method {
        Method::GET => get_bundle(state, id),
        Method::POST => add_transaction(state, id, body),
        Method::DELETE => delete_bundle(state, id),
        _ => Err(ApiError::MethodNotAllowed),
    }
}

fn get_bundle(state: &AppState, id: BundleId) -> ApiResult<Response> {
    let response = BundleResponse {
        raw_txs: state.store.list(&id),
        bundle_id: id.to_string(),
    };

    let body = serde_json::to_vec(&response).map_err(ApiError::Encode)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

fn add_transaction(state: &AppState, id: BundleId, body: &[u8]) -> ApiResult<Response> {
    let request: TransactionRequest =
        serde_json::from_slice(body).map_err(ApiError::InvalidBody)?;
    let record = RawTx::parse(request.raw_tx.unwrap_or_default())?;

    let outcome = state.store.append(&id, record);
    debug!(bundle_id = %id, outcome = ?outcome, "Added transaction to bundle");

    Ok(StatusCode::OK.into_response())
}

fn delete_bundle(state: &AppState, id: BundleId) -> ApiResult<Response> {
    state.store.delete(&id);
    Ok(StatusCode::OK.into_response())
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.store.status();
    Json(serde_json::json!({
        "status": "healthy",
        "service": "bundle-gateway",
        "version": crate::VERSION,
        "bundles": status.bundle_count,
        "records": status.record_count,
    }))
}
