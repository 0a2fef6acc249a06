pub mod health;
pub mod hello;
pub mod version;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/version", get(version::version_handler))
        .route("/api/hello", get(hello::hello_handler))
        .fallback(not_found)
        .with_state(state)
}
