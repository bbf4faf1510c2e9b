//! Repository for the `posters` table.

use sqlx::PgPool;

use cinescope_core::types::DbId;

use crate::models::poster::Poster;

/// Provides lookup operations for movie posters.
pub struct PosterRepo;

impl PosterRepo {
    /// Find the poster for one movie id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Poster>, sqlx::Error> {
        sqlx::query_as::<_, Poster>("SELECT id, link FROM posters WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
