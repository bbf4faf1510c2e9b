//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument. The catalog is read-only,
//! so there are no insert or update paths here.

pub mod actor_repo;
pub mod genre_repo;
pub mod movie_repo;
pub mod oscar_award_repo;
pub mod poster_repo;

pub use actor_repo::ActorRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
pub use oscar_award_repo::OscarAwardRepo;
pub use poster_repo::PosterRepo;
