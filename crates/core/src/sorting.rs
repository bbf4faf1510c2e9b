//! Sort field allow-lists and ORDER BY construction.
//!
//! User-facing sort names map onto a fixed set of columns per resource;
//! anything outside the list is rejected before SQL is built. Every clause
//! ends with the id column ascending so paging over equal sort values
//! stays reproducible.

use crate::error::CoreError;

/// A sortable field: the external name clients send and the column it
/// resolves to.
#[derive(Debug, Clone, Copy)]
pub struct SortField {
    pub name: &'static str,
    pub column: &'static str,
}

// ---------------------------------------------------------------------------
// Per-resource allow-lists
// ---------------------------------------------------------------------------

/// Sortable fields for movie listings. `year` and `duration` are friendly
/// aliases for the `date` and `minute` columns.
pub const MOVIE_SORT_FIELDS: &[SortField] = &[
    SortField { name: "name", column: "m.name" },
    SortField { name: "date", column: "m.date" },
    SortField { name: "year", column: "m.date" },
    SortField { name: "rating", column: "m.rating" },
    SortField { name: "minute", column: "m.minute" },
    SortField { name: "duration", column: "m.minute" },
    SortField { name: "id", column: "m.id" },
];

/// Tie-break column for movie listings.
pub const MOVIE_TIE_BREAK_COLUMN: &str = "m.id";

/// Sortable fields for actor listings.
pub const ACTOR_SORT_FIELDS: &[SortField] = &[
    SortField { name: "name", column: "name" },
    SortField { name: "id", column: "id" },
];

/// Tie-break column for actor listings.
pub const ACTOR_TIE_BREAK_COLUMN: &str = "id";

/// Sortable fields for Oscar award listings.
pub const OSCAR_SORT_FIELDS: &[SortField] = &[
    SortField { name: "year_film", column: "year_film" },
    SortField { name: "year_ceremony", column: "year_ceremony" },
    SortField { name: "ceremony", column: "ceremony" },
    SortField { name: "category", column: "category" },
    SortField { name: "name", column: "name" },
    SortField { name: "film", column: "film" },
    SortField { name: "winner", column: "winner" },
    SortField { name: "id", column: "id" },
];

/// Tie-break column for Oscar award listings.
pub const OSCAR_TIE_BREAK_COLUMN: &str = "id";

// ---------------------------------------------------------------------------
// ORDER BY construction
// ---------------------------------------------------------------------------

/// Build a complete `ORDER BY` clause from user sort parameters.
///
/// - No `sort_by` (or a blank one) sorts by the tie-break column alone.
/// - An unknown `sort_by` is a validation error.
/// - Any `sort_direction` other than `desc` (case-insensitive) sorts
///   ascending.
///
/// # Examples
///
/// ```
/// use cinescope_core::sorting::{order_by_clause, MOVIE_SORT_FIELDS, MOVIE_TIE_BREAK_COLUMN};
/// let clause = order_by_clause(MOVIE_SORT_FIELDS, MOVIE_TIE_BREAK_COLUMN, Some("rating"), Some("desc"));
/// assert_eq!(clause.unwrap(), "ORDER BY m.rating DESC, m.id ASC");
/// ```
pub fn order_by_clause(
    fields: &[SortField],
    tie_break: &str,
    sort_by: Option<&str>,
    sort_direction: Option<&str>,
) -> Result<String, CoreError> {
    let Some(sort_by) = sort_by.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(format!("ORDER BY {tie_break} ASC"));
    };

    let field = fields
        .iter()
        .find(|f| f.name == sort_by)
        .ok_or_else(|| CoreError::Validation(format!("unknown sort field: {sort_by}")))?;

    let direction = match sort_direction {
        Some(d) if d.eq_ignore_ascii_case("desc") => "DESC",
        _ => "ASC",
    };

    if field.column == tie_break {
        Ok(format!("ORDER BY {} {direction}", field.column))
    } else {
        Ok(format!("ORDER BY {} {direction}, {tie_break} ASC", field.column))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
