//! Generation request/result types and the generation error taxonomy.
//!
//! Shared by the enhancement gateway (which produces these) and the HTTP
//! layer (which maps them to responses).

use serde::{Deserialize, Serialize};

use crate::parameters::ParameterSet;
use crate::scene::GenerationMode;

/// A request to produce a prompt for a description and parameter selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: ParameterSet,
    #[serde(default)]
    pub mode: GenerationMode,
}

impl GenerationRequest {
    /// Both the description and the parameter selection are empty.
    pub fn is_blank(&self) -> bool {
        is_blank_input(&self.description, &self.parameters)
    }
}

/// A successfully produced prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub prompt: String,
}

/// Why a generation attempt failed. Manual assembly never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// Neither a description nor any parameter was supplied.
    #[error("Please add a description or select some parameters first")]
    MissingInput,

    /// The completion service failed or returned unusable content.
    #[error("Completion service failure: {message}")]
    UpstreamFailure { message: String },
}

impl GenerationError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamFailure {
            message: message.into(),
        }
    }
}

/// Whether a description/parameter pair carries no input at all.
pub fn is_blank_input(description: &str, parameters: &ParameterSet) -> bool {
    description.is_empty() && parameters.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::ParameterCategory;

    #[test]
    fn request_defaults_to_manual_mode() {
        let request: GenerationRequest =
            serde_json::from_value(serde_json::json!({ "description": "Harbour" })).unwrap();
        assert_eq!(request.mode, GenerationMode::Manual);
        assert!(request.parameters.is_empty());
    }

    #[test]
    fn blank_only_when_both_inputs_empty() {
        let mut request = GenerationRequest::default();
        assert!(request.is_blank());

        request.parameters.set(ParameterCategory::Mood, "Calm");
        assert!(!request.is_blank());

        let request = GenerationRequest {
            description: "x".to_string(),
            ..Default::default()
        };
        assert!(!request.is_blank());
    }

    #[test]
    fn upstream_failure_message_is_displayed() {
        let err = GenerationError::upstream("rate limited");
        assert_eq!(err.to_string(), "Completion service failure: rate limited");
    }
}
