pub mod catalog;
pub mod favorites;
pub mod generation;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /parameters                                          category catalogue
/// /platforms                                           export platforms
///
/// /projects                                            list, create
/// /projects/{id}                                       get, rename, delete
/// /projects/{id}/scenes                                add scene
/// /projects/{id}/scenes/{scene_id}                     update, delete
/// /projects/{id}/scenes/{scene_id}/duplicate           duplicate (POST)
/// /projects/{id}/scenes/{scene_id}/generate            generate prompt (POST)
/// /projects/{id}/copy-settings                         copy settings (POST)
///
/// /favorites                                           list (?search=), create
/// /favorites/{id}                                      delete
/// /favorites/{id}/apply                                apply to a scene (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Static catalogues.
        .merge(catalog::router())
        // Projects and their scenes.
        .nest("/projects", project::router())
        // Saved parameter presets.
        .nest("/favorites", favorites::router())
}
