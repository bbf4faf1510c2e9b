use crate::types::DbId;

/// Domain-level errors shared across the catalog crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Lookup of a specific entity came up empty.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A search or listing produced no rows.
    #[error("No matching results")]
    NoResults,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
