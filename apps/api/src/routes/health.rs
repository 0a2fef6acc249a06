use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;
use crate::version::AppVersion;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: AppVersion,
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    tracing::debug!(version = %state.version, "health check");
    Json(HealthResponse {
        status: "healthy",
        version: state.version,
    })
}
