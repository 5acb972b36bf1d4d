use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reelprompt_core::error::CoreError;
use reelprompt_core::generation::GenerationError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`GenerationError`] for prompt
/// generation failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `reelprompt_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Prompt generation failed (missing input or completion service).
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            },

            // --- Generation errors carry a headline plus a detail message ---
            AppError::Generation(err) => return generation_error_response(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a [`GenerationError`] to `{ error, message, code }`.
///
/// - `MissingInput` maps to 400 `MISSING_INPUT`.
/// - `UpstreamFailure` maps to 502 `UPSTREAM_FAILURE`, with the upstream
///   message passed through as `message`.
fn generation_error_response(err: &GenerationError) -> Response {
    let (status, code, headline, message) = match err {
        GenerationError::MissingInput => (
            StatusCode::BAD_REQUEST,
            "MISSING_INPUT",
            "Missing information",
            err.to_string(),
        ),
        GenerationError::UpstreamFailure { message } => (
            StatusCode::BAD_GATEWAY,
            "UPSTREAM_FAILURE",
            "Failed to generate prompt",
            message.clone(),
        ),
    };

    let body = json!({
        "error": headline,
        "message": message,
        "code": code,
    });

    (status, axum::Json(body)).into_response()
}
