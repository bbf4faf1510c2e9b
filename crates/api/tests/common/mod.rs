//! Shared setup for HTTP-level integration tests: a router builder that
//! mirrors production middleware, request helpers, and catalog fixtures.

// Not every test binary touches every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use cinescope_api::cache::SearchCache;
use cinescope_api::config::ServerConfig;
use cinescope_api::routes;
use cinescope_api::state::AppState;

/// Movie ids in ascending rating order, NULL rating last.
pub const RATING_ASC_IDS: [i64; 8] = [6, 4, 8, 5, 2, 7, 1, 3];

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        statement_timeout_secs: 10,
        search_cache_enabled: true,
        search_cache_capacity: 64,
        search_cache_ttl_secs: 60,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Same as [`build_test_app`] but with an explicit config, for tests that
/// disable the search cache or shrink its TTL.
pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let search_cache = Arc::new(SearchCache::new(
        config.search_cache_capacity,
        Duration::from_secs(config.search_cache_ttl_secs),
    ));

    let state = AppState {
        pool,
        config: Arc::new(config),
        search_cache,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Consume a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("Body is not valid JSON: {e}"))
}

/// Consume a response body as UTF-8 text. Empty-body assertions go
/// through this helper.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------
//
// The rows duplicate the storage crate's test fixture (integration test
// dirs are per crate), so sort and filter expectations line up across
// both suites. Gaps are deliberate: NULL ratings, years, and minutes, a
// poster with a NULL link, an actor with two roles in one movie.

/// Seed movies, genres, actors, posters, and the movie 1 relations.
pub async fn seed_catalog(pool: &PgPool) {
    sqlx::query(
        "INSERT INTO movies (id, name, date, tagline, description, minute, rating) VALUES
         (1, 'The Long Harbor', 1995, 'Every tide returns', 'A dockside reckoning.', 142, 8.3),
         (2, 'Night Shift', 2001, NULL, 'One ward, one night.', 98, 6.4),
         (3, 'Paper Moons', 1987, 'Cut-out dreams', NULL, 115, NULL),
         (4, 'Silent Era', NULL, NULL, 'Found-footage collage.', 80, 4.9),
         (5, 'Iron Garden', 2015, NULL, NULL, NULL, 6.1),
         (6, 'Glass Coast', 2019, 'Nothing sticks', 'A resort out of season.', 105, 3.2),
         (7, 'The Harbor Line', 1999, NULL, 'A ferry route disappears.', 131, 7.8),
         (8, 'Red Meridian', 2010, NULL, 'A border town heist.', 88, 5.5)",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO genres (genre_id, genre) VALUES
         (1, 'Drama'), (2, 'Crime'), (3, 'Comedy'), (4, 'Thriller')",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO movie_has_genres (movie_id, genre_id) VALUES
         (1, 1), (1, 2),
         (2, 4),
         (3, 3), (3, 1),
         (4, 1),
         (5, 4), (5, 2),
         (6, 3),
         (7, 1), (7, 2), (7, 4),
         (8, 2)",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO actors (id, name) VALUES
         (101, 'Elena Vasquez'),
         (102, 'Marcus Webb'),
         (103, 'Sofia Linares'),
         (104, NULL)",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO movies_have_actors (movie_id, actor_id, role) VALUES
         (1, 101, 'Captain Reyes'),
         (1, 101, 'Young Reyes'),
         (1, 102, 'Dockmaster'),
         (2, 101, 'Nurse Calloway'),
         (3, 103, 'Lily'),
         (5, 102, 'Gardener'),
         (7, 101, 'Harbormaster'),
         (7, 103, 'Inspector Vale'),
         (8, 104, 'The Stranger')",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO posters (id, link) VALUES
         (1, 'https://img.example/long-harbor.jpg'),
         (2, 'https://img.example/night-shift.jpg'),
         (3, NULL)",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO crew (id, role, name) VALUES
         (1, 'Director', 'Hanna Pryce'),
         (1, 'Composer', 'Felix Orta')",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO themes (id, theme) VALUES (1, 'Isolation'), (1, 'Redemption')")
        .execute(pool)
        .await
        .unwrap();

    sqlx::query(
        "INSERT INTO languages (id, type, language) VALUES
         (1, 'Spoken', 'English'),
         (1, 'Spoken', 'Spanish')",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO country (id, name) VALUES (201, 'United States'), (202, 'Spain')")
        .execute(pool)
        .await
        .unwrap();

    sqlx::query("INSERT INTO movie_have_countries (movie_id, country_id) VALUES (1, 201), (1, 202)")
        .execute(pool)
        .await
        .unwrap();

    sqlx::query("INSERT INTO studio (id, name) VALUES (301, 'Harbor Light Pictures')")
        .execute(pool)
        .await
        .unwrap();

    sqlx::query("INSERT INTO movie_have_studios (movie_id, studio_id) VALUES (1, 301)")
        .execute(pool)
        .await
        .unwrap();

    sqlx::query(
        "INSERT INTO releases (id, country, date, type, rating) VALUES
         (1, 201, '1995-06-12', 'Theatrical', 'R'),
         (1, 202, '1995-09-01', 'Theatrical', NULL)",
    )
    .execute(pool)
    .await
    .unwrap();
}

/// Seed the award records. Row 5 has a NULL film year and film name,
/// exercising NULL-tolerant range filters.
pub async fn seed_oscar_awards(pool: &PgPool) {
    sqlx::query(
        "INSERT INTO oscar_awards \
         (id, year_film, year_ceremony, ceremony, category, name, film, winner) VALUES
         (1, 1994, 1995, 67, 'BEST PICTURE', 'Saul Mendick, Producer', 'The Long Harbor', TRUE),
         (2, 1994, 1995, 67, 'ACTRESS IN A LEADING ROLE', 'Elena Vasquez', 'The Long Harbor', FALSE),
         (3, 2000, 2001, 73, 'BEST PICTURE', 'Nadia Bloom, Producer', 'Night Shift', FALSE),
         (4, 2000, 2001, 73, 'MUSIC (Original Score)', 'Felix Orta', 'Night Shift', TRUE),
         (5, NULL, 1929, 2, 'SPECIAL AWARD', 'Warner Bros.', NULL, TRUE),
         (6, 2014, 2015, 87, 'ACTRESS IN A SUPPORTING ROLE', 'Sofia Linares', 'Iron Garden', FALSE)",
    )
    .execute(pool)
    .await
    .unwrap();
}
