//! Database access layer for the movie catalog: pool construction,
//! migrations, and the per-table repositories.

pub mod models;
pub mod predicates;
pub mod repositories;

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// `statement_timeout` is applied server-side on every connection, so a
/// runaway query is cancelled instead of occupying the pool until the
/// HTTP timeout fires.
pub async fn create_pool(
    database_url: &str,
    statement_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    let options = database_url
        .parse::<PgConnectOptions>()?
        .options([("statement_timeout", format!("{}s", statement_timeout.as_secs()))]);

    PgPoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
