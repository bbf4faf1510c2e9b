//! Poster entity model.

use serde::Serialize;
use sqlx::FromRow;

use cinescope_core::types::DbId;

/// A movie's poster link. Shares its id with the movie row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Poster {
    pub id: DbId,
    pub link: Option<String>,
}
