//! Actor entity model.

use serde::Serialize;
use sqlx::FromRow;

use cinescope_core::types::DbId;

/// An actor. Names are nullable in the source dataset.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: Option<String>,
}
