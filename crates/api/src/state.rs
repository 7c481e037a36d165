use std::sync::Arc;

use launchpad_ai::Generator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: launchpad_db::DbPool,
    /// Server configuration (JWT and webhook secrets are read from here).
    pub config: Arc<ServerConfig>,
    /// Mock or live artifact generator.
    pub generator: Arc<dyn Generator>,
}
