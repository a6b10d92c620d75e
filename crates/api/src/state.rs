use std::sync::Arc;

use bookstall_core::catalog::Catalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The fixture catalog served by `/books` and `/authors`.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(Catalog::default()),
        }
    }
}
