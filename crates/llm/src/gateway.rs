//! Enhancement gateway: AI-mode prompt generation.
//!
//! Validates input, serializes the instruction block, dispatches a single
//! completion call and hands back the first completion verbatim. Every
//! provider failure is folded into [`GenerationError::UpstreamFailure`];
//! there is no retry and no fallback to manual assembly.

use std::sync::Arc;

use reelprompt_core::assembler::assemble_manual_prompt;
use reelprompt_core::generation::{
    is_blank_input, GenerationError, GenerationRequest, GenerationResult,
};
use reelprompt_core::instruction::{build_instruction_block, SYSTEM_INSTRUCTION};
use reelprompt_core::parameters::ParameterSet;
use reelprompt_core::scene::GenerationMode;

use crate::config::{CompletionConfig, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::provider::{CompletionProvider, CompletionRequest};

/// Fixed sampling parameters for enhancement requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl From<&CompletionConfig> for SamplingConfig {
    fn from(config: &CompletionConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Produces prompts in either mode. Stateless apart from its provider, so
/// concurrent calls are not serialized.
#[derive(Clone)]
pub struct EnhancementGateway {
    provider: Arc<dyn CompletionProvider>,
    sampling: SamplingConfig,
}

impl EnhancementGateway {
    pub fn new(provider: Arc<dyn CompletionProvider>, sampling: SamplingConfig) -> Self {
        Self { provider, sampling }
    }

    /// Generate a prompt according to the request's mode.
    ///
    /// Manual mode assembles locally and always succeeds.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        match request.mode {
            GenerationMode::Manual => Ok(GenerationResult {
                prompt: assemble_manual_prompt(&request.description, &request.parameters),
            }),
            GenerationMode::Ai => {
                self.generate_enhanced_prompt(&request.description, &request.parameters)
                    .await
            }
        }
    }

    /// Ask the completion service to write the prompt.
    ///
    /// Fails with [`GenerationError::MissingInput`] without touching the
    /// provider when both the description and the parameters are empty.
    pub async fn generate_enhanced_prompt(
        &self,
        description: &str,
        parameters: &ParameterSet,
    ) -> Result<GenerationResult, GenerationError> {
        if is_blank_input(description, parameters) {
            return Err(GenerationError::MissingInput);
        }

        let request = CompletionRequest {
            system: SYSTEM_INSTRUCTION.to_string(),
            user: build_instruction_block(description, parameters),
            temperature: self.sampling.temperature,
            max_tokens: self.sampling.max_tokens,
        };

        match self.provider.complete(&request).await {
            Ok(prompt) => {
                tracing::debug!(
                    provider = self.provider.name(),
                    parameter_count = parameters.len(),
                    prompt_len = prompt.len(),
                    "Enhanced prompt generated"
                );
                Ok(GenerationResult { prompt })
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "Completion request failed"
                );
                Err(GenerationError::upstream(e.display_message()))
            }
        }
    }
}
