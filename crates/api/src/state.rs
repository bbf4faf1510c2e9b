use std::sync::Arc;

use crate::cache::SearchCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinescope_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cached movie search batches.
    pub search_cache: Arc<SearchCache>,
}
