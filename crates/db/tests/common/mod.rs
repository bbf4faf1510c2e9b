//! Shared fixtures for repository integration tests.
//!
//! `seed_catalog` installs a small movie catalog with deliberate gaps:
//! NULL ratings, years, and minutes; a poster row with a NULL link; an
//! actor with two roles in the same movie. The filter and sort tests
//! depend on those gaps, so extend the data rather than filling them in.

// Not every test binary touches every fixture.
#![allow(dead_code)]

use sqlx::PgPool;

/// Movie ids in ascending rating order, NULL rating last.
pub const RATING_ASC_IDS: [i64; 8] = [6, 4, 8, 5, 2, 7, 1, 3];

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

    // Actor 101 carries two roles in movie 1 on purpose: membership
    // filters must still return the movie once.
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

    // Relations attached to movie 1, exercised by the detail lookup.
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
