/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Postgres statement timeout in seconds (default: `10`). A query that
    /// outlives it is cancelled server-side and surfaces as a storage error.
    pub statement_timeout_secs: u64,
    /// Whether the movie search batch cache is active (default: `true`).
    pub search_cache_enabled: bool,
    /// Maximum number of cached search batches (default: `256`).
    pub search_cache_capacity: u64,
    /// Seconds a cached search batch stays valid (default: `60`).
    pub search_cache_ttl_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `STATEMENT_TIMEOUT_SECS` | `10`                       |
    /// | `SEARCH_CACHE_ENABLED`   | `true`                     |
    /// | `SEARCH_CACHE_CAPACITY`  | `256`                      |
    /// | `SEARCH_CACHE_TTL_SECS`  | `60`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let statement_timeout_secs: u64 = std::env::var("STATEMENT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("STATEMENT_TIMEOUT_SECS must be a valid u64");

        let search_cache_enabled: bool = std::env::var("SEARCH_CACHE_ENABLED")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SEARCH_CACHE_ENABLED must be true or false");

        let search_cache_capacity: u64 = std::env::var("SEARCH_CACHE_CAPACITY")
            .unwrap_or_else(|_| "256".into())
            .parse()
            .expect("SEARCH_CACHE_CAPACITY must be a valid u64");

        let search_cache_ttl_secs: u64 = std::env::var("SEARCH_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("SEARCH_CACHE_TTL_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            statement_timeout_secs,
            search_cache_enabled,
            search_cache_capacity,
            search_cache_ttl_secs,
        }
    }
}
