//! Handlers for the `/favorites` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reelprompt_core::favorites::{CreateFavorite, Favorite};
use reelprompt_core::scene::Scene;
use reelprompt_core::types::DbId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing favorites.
#[derive(Debug, Deserialize)]
pub struct ListFavoritesQuery {
    pub search: Option<String>,
}

/// Request body naming the scene a favorite is applied to.
#[derive(Debug, Deserialize)]
pub struct ApplyFavorite {
    pub project_id: DbId,
    pub scene_id: DbId,
}

/// GET /api/v1/favorites?search=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListFavoritesQuery>,
) -> Json<DataResponse<Vec<Favorite>>> {
    Json(DataResponse {
        data: state.store.list_favorites(query.search.as_deref()).await,
    })
}

/// POST /api/v1/favorites
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFavorite>,
) -> AppResult<(StatusCode, Json<DataResponse<Favorite>>)> {
    let favorite = state.store.create_favorite(input).await?;
    tracing::info!(favorite_id = favorite.id, name = %favorite.name, "Favorite saved");
    Ok((StatusCode::CREATED, Json(DataResponse { data: favorite })))
}

/// DELETE /api/v1/favorites/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.store.delete_favorite(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/favorites/{id}/apply
pub async fn apply(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ApplyFavorite>,
) -> AppResult<Json<DataResponse<Scene>>> {
    let scene = state
        .store
        .apply_favorite(id, input.project_id, input.scene_id)
        .await?;
    tracing::info!(favorite_id = id, project_id = input.project_id, scene_id = input.scene_id, "Favorite applied");
    Ok(Json(DataResponse { data: scene }))
}
