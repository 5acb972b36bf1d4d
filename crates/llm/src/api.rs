//! REST client for an OpenAI-compatible chat completions endpoint.
//!
//! Wraps `POST {base_url}/chat/completions` using [`reqwest`] and implements
//! [`CompletionProvider`] for the enhancement gateway.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::CompletionConfig;
use crate::messages::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::provider::{CompletionError, CompletionProvider, CompletionRequest};

/// HTTP client for the completion service.
pub struct CompletionApi {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl CompletionApi {
    /// Build a client from configuration, applying the configured timeout.
    pub fn new(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self::with_client(
            client,
            config.base_url.clone(),
            config.api_key.clone(),
            config.model.clone(),
        ))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: String,
        api_key: Option<String>,
        model: String,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one chat completion and return the first choice's text.
    pub async fn chat_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage::system(&request.system),
                ChatMessage::user(&request.user),
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(model = %self.model, max_tokens = request.max_tokens, "Sending chat completion");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)
            .map_err(|e| CompletionError::Malformed(e.to_string()))?;

        parsed
            .into_first_content()
            .ok_or(CompletionError::EmptyCompletion)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. On failure, extract the
    /// upstream `error.message` when the body is JSON, else keep the raw text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CompletionError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error.message)
            .unwrap_or(body);

        Err(CompletionError::ApiError {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CompletionProvider for CompletionApi {
    fn name(&self) -> &'static str {
        "openai-compatible"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.chat_completion(request).await
    }
}
