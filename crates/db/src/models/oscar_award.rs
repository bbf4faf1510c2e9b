//! Oscar award entity model and search filter DTO.
//!
//! Award records come from a historical dataset where nearly every column
//! is nullable; the row model reflects that instead of papering over it.

use serde::Serialize;
use sqlx::FromRow;

use cinescope_core::types::DbId;

/// One nomination or win from the awards dataset.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OscarAward {
    pub id: DbId,
    pub year_film: Option<i32>,
    pub year_ceremony: Option<i32>,
    pub ceremony: Option<i32>,
    pub category: Option<String>,
    pub name: Option<String>,
    pub film: Option<String>,
    pub winner: Option<bool>,
}

/// Filter parameters for award search queries.
///
/// String filters match case-insensitive substrings. Numeric bounds are
/// active only when positive.
#[derive(Debug, Clone, Default)]
pub struct OscarAwardFilter {
    pub name: Option<String>,
    pub film: Option<String>,
    pub category: Option<String>,
    pub min_year_film: Option<i32>,
    pub max_year_film: Option<i32>,
    pub min_year_ceremony: Option<i32>,
    pub max_year_ceremony: Option<i32>,
    pub min_ceremony: Option<i32>,
    pub max_ceremony: Option<i32>,
    pub winner: Option<bool>,
}
