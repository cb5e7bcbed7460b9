use axum::Json;
use axum::extract::{ConnectInfo, Path, State};
use axum::http::HeaderMap;
use serde_json::{Value, json};
use std::net::SocketAddr;
use tracing::debug;

use crate::errors::ApiError;
use crate::state::AppState;

/// Identity reported by the index document
pub const SERVICE_ID: &str = "updnsd";

/// Published API version
pub const API_VERSION: &str = "1.0.0";

/// `GET /`
pub async fn get_index() -> Json<Value> {
    Json(json!({ "id": SERVICE_ID, "api-version": API_VERSION }))
}

/// `POST /update/{hostname}/{token}`
///
/// No address in the path: the candidate is the direct TCP peer, or the
/// first valid `X-Forwarded-For` entry when the peer is a trusted proxy.
/// The resolved candidate goes through the same pipeline as an explicit
/// one, validation included.
pub async fn post_update(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Path((hostname, token)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<&'static str, ApiError> {
    let forwarded_for = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok());

    let ip = state
        .service
        .resolve_client_ip(&peer.ip().to_string(), forwarded_for);
    debug!(peer = %peer, candidate = %ip, "resolved client address");

    state.service.apply_update(&hostname, &token, &ip).await?;
    Ok("SUCCESS")
}

/// `POST /update/{hostname}/{token}/{ip}`
pub async fn post_update_for_ip(
    State(state): State<AppState>,
    Path((hostname, token, ip)): Path<(String, String, String)>,
) -> Result<&'static str, ApiError> {
    state.service.apply_update(&hostname, &token, &ip).await?;
    Ok("SUCCESS")
}
