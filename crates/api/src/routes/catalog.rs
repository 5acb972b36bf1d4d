use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalogue routes, merged directly into `/api/v1`.
///
/// ```text
/// GET    /parameters    -> list_parameters
/// GET    /platforms     -> list_platforms
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parameters", get(catalog::list_parameters))
        .route("/platforms", get(catalog::list_platforms))
}
