//! HTTP handlers for the catalog endpoints.

pub mod actors;
pub mod genres;
pub mod movies;
pub mod oscar_awards;
pub mod posters;
