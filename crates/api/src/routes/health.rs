use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether an API key for the completion service is configured.
    pub completion_configured: bool,
}

/// GET /health -- returns service health. Without a completion API key the
/// service is `degraded`: manual mode works, AI mode fails.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let completion_configured = state.config.completion.api_key.is_some();

    let status = if completion_configured { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        completion_configured,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
