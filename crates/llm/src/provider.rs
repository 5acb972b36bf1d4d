//! Completion provider abstraction.
//!
//! The gateway talks to a [`CompletionProvider`] rather than to reqwest
//! directly, so the HTTP client can be swapped or faked.

use async_trait::async_trait;

/// A single chat completion call: one system message and one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Errors from a completion provider.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Completion API error ({status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Upstream error message, or the raw body when it is not JSON.
        message: String,
    },

    /// No API key is configured.
    #[error("Completion service is not configured (missing API key)")]
    MissingApiKey,

    /// The response body could not be decoded.
    #[error("Malformed completion response: {0}")]
    Malformed(String),

    /// The response carried no completion text.
    #[error("Completion response contained no content")]
    EmptyCompletion,
}

impl CompletionError {
    /// Message suitable for showing to the end user.
    pub fn display_message(&self) -> String {
        match self {
            Self::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// A text-completion backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Run one completion and return the text of the first choice.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
