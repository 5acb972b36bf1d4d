use axum::routing::post;
use axum::Router;

use crate::handlers::generation;
use crate::state::AppState;

/// Mount the prompt generation endpoint (root level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate-prompt", post(generation::generate_prompt))
}
