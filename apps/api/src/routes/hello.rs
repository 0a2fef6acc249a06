use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: String,
    pub environment: String,
}

/// GET /api/hello
/// Greets the caller and reports which deployment answered.
pub async fn hello_handler(State(state): State<AppState>) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: format!("Hello from {}!", env!("CARGO_PKG_NAME")),
        environment: state.config.environment_name().to_string(),
    })
}
