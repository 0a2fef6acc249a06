use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;
use crate::version::AppVersion;

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: AppVersion,
}

/// GET /version
pub async fn version_handler(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        version: state.version,
    })
}
