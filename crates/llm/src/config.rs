/// Completion service configuration loaded from environment variables.
///
/// All fields except the API key have defaults. Without an API key the
/// client still builds, but every AI-mode request fails upstream.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Bearer token for the completion service.
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible API (no trailing slash).
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Per-request HTTP timeout in seconds.
    pub http_timeout_secs: u64,
}

/// Default completion endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

/// Default output token bound.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            http_timeout_secs: 60,
        }
    }
}

impl CompletionConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                      |
    /// |--------------------------------|------------------------------|
    /// | `OPENAI_API_KEY`               | unset                        |
    /// | `COMPLETION_BASE_URL`          | `https://api.openai.com/v1`  |
    /// | `COMPLETION_MODEL`             | `gpt-4o`                     |
    /// | `COMPLETION_TEMPERATURE`       | `0.8`                        |
    /// | `COMPLETION_MAX_TOKENS`        | `500`                        |
    /// | `COMPLETION_HTTP_TIMEOUT_SECS` | `60`                         |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let base_url = std::env::var("COMPLETION_BASE_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let model = std::env::var("COMPLETION_MODEL").unwrap_or(defaults.model);

        let temperature: f32 = std::env::var("COMPLETION_TEMPERATURE")
            .map(|v| {
                v.parse()
                    .expect("COMPLETION_TEMPERATURE must be a valid number")
            })
            .unwrap_or(defaults.temperature);

        let max_tokens: u32 = std::env::var("COMPLETION_MAX_TOKENS")
            .map(|v| v.parse().expect("COMPLETION_MAX_TOKENS must be a valid u32"))
            .unwrap_or(defaults.max_tokens);

        let http_timeout_secs: u64 = std::env::var("COMPLETION_HTTP_TIMEOUT_SECS")
            .map(|v| {
                v.parse()
                    .expect("COMPLETION_HTTP_TIMEOUT_SECS must be a valid u64")
            })
            .unwrap_or(defaults.http_timeout_secs);

        Self {
            api_key,
            base_url,
            model,
            temperature,
            max_tokens,
            http_timeout_secs,
        }
    }
}
