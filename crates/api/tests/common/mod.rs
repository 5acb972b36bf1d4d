#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use reelprompt_api::config::ServerConfig;
use reelprompt_api::router::build_app_router;
use reelprompt_api::state::AppState;
use reelprompt_api::store::MemoryStore;
use reelprompt_llm::config::CompletionConfig;
use reelprompt_llm::gateway::{EnhancementGateway, SamplingConfig};
use reelprompt_llm::provider::{CompletionError, CompletionProvider, CompletionRequest};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and a dummy completion API key.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        completion: CompletionConfig {
            api_key: Some("test-key".to_string()),
            ..CompletionConfig::default()
        },
    }
}

/// Completion provider that records calls and replies with a fixed outcome.
pub struct FakeProvider {
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
    reply: fn() -> Result<String, CompletionError>,
}

impl FakeProvider {
    pub fn new(reply: fn() -> Result<String, CompletionError>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            reply,
        })
    }

    /// Answers every request with the same prompt.
    pub fn replying_ok() -> Arc<Self> {
        Self::new(|| Ok("A sweeping aerial shot of snow-capped peaks at golden hour".to_string()))
    }

    /// A provider that always fails the way an HTTP 500 does.
    pub fn failing() -> Arc<Self> {
        Self::new(|| {
            Err(CompletionError::ApiError {
                status: 500,
                message: "The server had an error while processing your request".to_string(),
            })
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        (self.reply)()
    }
}

/// A test application together with handles on its store and provider.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub provider: Arc<FakeProvider>,
}

/// Build the full application router with all middleware layers, backed by
/// an empty store and the given fake provider.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(provider: Arc<FakeProvider>) -> TestApp {
    let config = test_config();
    let store = Arc::new(MemoryStore::new());
    let gateway = EnhancementGateway::new(provider.clone(), SamplingConfig::from(&config.completion));

    let state = AppState {
        config: Arc::new(config.clone()),
        store: Arc::clone(&store),
        gateway,
    };

    TestApp {
        router: build_app_router(state, &config),
        store,
        provider,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
