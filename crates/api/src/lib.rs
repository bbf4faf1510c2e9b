//! Cinescope API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! search cache) so integration tests and the binary entrypoint can both
//! access them.

pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
