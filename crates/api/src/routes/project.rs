//! Route definitions for the `/projects` resource.
//!
//! Also nests scene routes under `/projects/{id}/scenes`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{project, scene};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                     -> list
/// POST   /                                     -> create
/// GET    /{id}                                 -> get_by_id
/// PUT    /{id}                                 -> update
/// DELETE /{id}                                 -> delete
///
/// POST   /{id}/scenes                          -> scene::create
/// PUT    /{id}/scenes/{scene_id}               -> scene::update
/// DELETE /{id}/scenes/{scene_id}               -> scene::delete
/// POST   /{id}/scenes/{scene_id}/duplicate     -> scene::duplicate
/// POST   /{id}/scenes/{scene_id}/generate      -> scene::generate
/// POST   /{id}/copy-settings                   -> scene::copy_settings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/scenes", post(scene::create))
        .route(
            "/{id}/scenes/{scene_id}",
            put(scene::update).delete(scene::delete),
        )
        .route("/{id}/scenes/{scene_id}/duplicate", post(scene::duplicate))
        .route("/{id}/scenes/{scene_id}/generate", post(scene::generate))
        .route("/{id}/copy-settings", post(scene::copy_settings))
}
