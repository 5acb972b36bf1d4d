use std::sync::Arc;

use reelprompt_llm::gateway::EnhancementGateway;

use crate::config::ServerConfig;
use crate::store::MemoryStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-memory projects and favorites.
    pub store: Arc<MemoryStore>,
    /// Prompt generation in both modes.
    pub gateway: EnhancementGateway,
}
