//! Health endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Name of the configured reply provider, `null` when replies are local only.
    pub provider: Option<String>,
}

/// `GET /health`: liveness probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: soothe_core::version(),
        provider: state.resolver.provider_name().map(str::to_string),
    })
}
