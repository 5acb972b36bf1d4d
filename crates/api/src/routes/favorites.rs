//! Route definitions for the `/favorites` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Routes mounted at `/favorites`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// DELETE /{id}           -> delete
/// POST   /{id}/apply     -> apply
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::list).post(favorites::create))
        .route("/{id}", delete(favorites::delete))
        .route("/{id}/apply", post(favorites::apply))
}
