//! Shared type aliases.

/// Database row identifier (BIGINT).
pub type DbId = i64;
