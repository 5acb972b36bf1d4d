use std::net::SocketAddr;
use std::sync::Arc;

use reelprompt_llm::api::CompletionApi;
use reelprompt_llm::gateway::{EnhancementGateway, SamplingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelprompt_api::config::ServerConfig;
use reelprompt_api::router::build_app_router;
use reelprompt_api::state::AppState;
use reelprompt_api::store::MemoryStore;

/// Name of the project every fresh process starts with.
const DEFAULT_PROJECT_NAME: &str = "Untitled Project";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "reelprompt_api=debug,reelprompt_llm=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Completion service ---
    let completion = CompletionApi::new(&config.completion)
        .expect("Failed to build completion HTTP client");
    if config.completion.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set, AI-mode generation will fail");
    }
    tracing::info!(
        base_url = %config.completion.base_url,
        model = %completion.model(),
        "Completion client ready"
    );
    let gateway = EnhancementGateway::new(
        Arc::new(completion),
        SamplingConfig::from(&config.completion),
    );

    // --- Store ---
    let store = Arc::new(MemoryStore::new());
    let project = store
        .create_project(DEFAULT_PROJECT_NAME)
        .await
        .expect("Failed to create default project");
    tracing::info!(project_id = project.id, "Default project created");

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        gateway,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
