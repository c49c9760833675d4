use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

pub const INDEX_MESSAGE: &str = "Search API is up! Use the /search?q=<your query> endpoint";

pub async fn index() -> &'static str {
    INDEX_MESSAGE
}

/// Liveness probe. Never touches the provider.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "search-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.render()
}
