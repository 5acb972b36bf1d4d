//! Handlers for scenes nested under `/projects/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use reelprompt_core::assembler::word_count;
use reelprompt_core::generation::GenerationRequest;
use reelprompt_core::scene::{Scene, SceneUpdate};
use reelprompt_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for copying settings between two scenes of a project.
#[derive(Debug, Deserialize)]
pub struct CopySettings {
    pub source_scene_id: DbId,
    pub target_scene_id: DbId,
    #[serde(default)]
    pub include_description: bool,
}

/// Result of generating a prompt for a stored scene.
#[derive(Debug, Serialize)]
pub struct SceneGeneration {
    pub prompt: String,
    pub word_count: usize,
    pub scene: Scene,
}

/// POST /api/v1/projects/{id}/scenes
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<DataResponse<Scene>>)> {
    let scene = state.store.add_scene(project_id).await?;
    tracing::info!(project_id, scene_id = scene.id, "Scene added");
    Ok((StatusCode::CREATED, Json(DataResponse { data: scene })))
}

/// PUT /api/v1/projects/{id}/scenes/{scene_id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, scene_id)): Path<(DbId, DbId)>,
    Json(input): Json<SceneUpdate>,
) -> AppResult<Json<DataResponse<Scene>>> {
    let scene = state.store.update_scene(project_id, scene_id, input).await?;
    Ok(Json(DataResponse { data: scene }))
}

/// DELETE /api/v1/projects/{id}/scenes/{scene_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, scene_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    state.store.delete_scene(project_id, scene_id).await?;
    tracing::info!(project_id, scene_id, "Scene deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/projects/{id}/scenes/{scene_id}/duplicate
pub async fn duplicate(
    State(state): State<AppState>,
    Path((project_id, scene_id)): Path<(DbId, DbId)>,
) -> AppResult<(StatusCode, Json<DataResponse<Scene>>)> {
    let scene = state.store.duplicate_scene(project_id, scene_id).await?;
    tracing::info!(project_id, source_scene_id = scene_id, scene_id = scene.id, "Scene duplicated");
    Ok((StatusCode::CREATED, Json(DataResponse { data: scene })))
}

/// POST /api/v1/projects/{id}/copy-settings
pub async fn copy_settings(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CopySettings>,
) -> AppResult<Json<DataResponse<Scene>>> {
    if input.source_scene_id == input.target_scene_id {
        return Err(AppError::BadRequest(
            "Source and target scene must be different".to_string(),
        ));
    }

    let scene = state
        .store
        .copy_settings(
            project_id,
            input.source_scene_id,
            input.target_scene_id,
            input.include_description,
        )
        .await?;
    Ok(Json(DataResponse { data: scene }))
}

/// POST /api/v1/projects/{id}/scenes/{scene_id}/generate
///
/// Generates according to the scene's mode. The store lock is not held
/// while the completion service is working; the prompt is written back only
/// when generation succeeds, so a failure leaves the previous prompt intact.
pub async fn generate(
    State(state): State<AppState>,
    Path((project_id, scene_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<SceneGeneration>>> {
    let scene = state.store.scene(project_id, scene_id).await?;
    let mode = scene.mode;
    let request = GenerationRequest {
        description: scene.description,
        parameters: scene.parameters,
        mode,
    };

    let result = state.gateway.generate(&request).await?;
    let words = word_count(&result.prompt);

    let scene = state
        .store
        .store_generated_prompt(project_id, scene_id, result.prompt.clone())
        .await?;

    tracing::info!(project_id, scene_id, mode = %mode, word_count = words, "Prompt generated");
    Ok(Json(DataResponse {
        data: SceneGeneration {
            prompt: result.prompt,
            word_count: words,
            scene,
        },
    }))
}
