//! Genre entity model.

use serde::Serialize;
use sqlx::FromRow;

use cinescope_core::types::DbId;

/// A genre name with its catalog id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub genre_id: DbId,
    pub genre_name: String,
}
