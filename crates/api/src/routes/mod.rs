pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies          paged search, filters + sort + projection (GET)
/// /movies/{id}     full movie detail (GET)
/// /actors          paged actor search (GET)
/// /genres          full genre list (GET)
/// /oscar_awards    paged award search (GET)
/// /movie_poster    poster lookup by movie id (GET, ?id=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(handlers::movies::search_movies))
        .route("/movies/{id}", get(handlers::movies::get_movie))
        .route("/actors", get(handlers::actors::search_actors))
        .route("/genres", get(handlers::genres::list_genres))
        .route(
            "/oscar_awards",
            get(handlers::oscar_awards::search_oscar_awards),
        )
        .route("/movie_poster", get(handlers::posters::get_movie_poster))
}
