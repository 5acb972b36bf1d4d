//! Handler for the stateless prompt generation endpoint.

use axum::extract::State;
use axum::Json;
use reelprompt_core::generation::{GenerationRequest, GenerationResult};
use reelprompt_core::parameters::validate_parameter_set;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/generate-prompt
///
/// Manual mode assembles locally; AI mode goes through the completion
/// service. Responds with a bare `{ "prompt": ... }` body.
pub async fn generate_prompt(
    State(state): State<AppState>,
    Json(input): Json<GenerationRequest>,
) -> AppResult<Json<GenerationResult>> {
    validate_parameter_set(&input.parameters)?;

    let result = state.gateway.generate(&input).await?;

    tracing::info!(
        mode = %input.mode,
        parameter_count = input.parameters.len(),
        prompt_len = result.prompt.len(),
        "Prompt generated"
    );
    Ok(Json(result))
}
