//! Domain-level types and pure helpers for the movie catalog.
//!
//! This crate has no I/O dependencies: everything here is either a plain
//! type or a pure function, usable from the repository layer, the HTTP
//! layer, and tests alike.

pub mod error;
pub mod paging;
pub mod projection;
pub mod sorting;
pub mod types;
