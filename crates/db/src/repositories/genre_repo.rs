//! Repository for the `genres` table.

use sqlx::PgPool;

use crate::models::genre::Genre;

/// Provides lookup operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// List every genre in id order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "SELECT genre_id, genre AS genre_name FROM genres ORDER BY genre_id",
        )
        .fetch_all(pool)
        .await
    }
}
