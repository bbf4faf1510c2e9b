//! Repository for the `movies` table and its related collections.

use serde_json::{Map as JsonMap, Value as JsonValue};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use cinescope_core::paging::PageRequest;
use cinescope_core::projection::{FieldKind, ProjectedField};
use cinescope_core::types::DbId;

use crate::models::movie::{
    ActorCredit, CrewCredit, MovieDetail, MovieFilter, MovieLanguage, MovieRelease, MovieSummary,
};
use crate::predicates::{bind_values, bind_values_scalar, BindValue, PredicateSet};

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Select list assembling one listing row per movie: the scalar columns plus
/// the aggregated genre names and the poster link.
const SUMMARY_COLUMNS: &str = "\
    m.id, m.name, m.date, m.tagline, m.description, m.minute, m.rating, \
    COALESCE(array_agg(g.genre ORDER BY g.genre) \
        FILTER (WHERE g.genre IS NOT NULL), ARRAY[]::text[]) AS genres, \
    p.link AS poster";

/// Join tree for listing queries. Grouping by both primary keys keeps the
/// genre aggregate well-defined while every scalar column stays selectable.
const SUMMARY_FROM: &str = "\
    FROM movies m \
    LEFT JOIN movie_has_genres mg ON mg.movie_id = m.id \
    LEFT JOIN genres g ON g.genre_id = mg.genre_id \
    LEFT JOIN posters p ON p.id = m.id";

const SUMMARY_GROUP_BY: &str = "GROUP BY m.id, p.id";

// ---------------------------------------------------------------------------
// MovieRepo
// ---------------------------------------------------------------------------

/// Provides search and lookup operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Fetch one page of movies matching the given filter.
    ///
    /// `order_by` must be a complete `ORDER BY ...` clause over the allowed
    /// sort columns; the caller builds it from the validated sort params.
    pub async fn search(
        pool: &PgPool,
        filter: &MovieFilter,
        order_by: &str,
        page: PageRequest,
    ) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let predicates = build_movie_filter(filter);
        let where_clause = predicates.where_clause();
        let bind_idx = predicates.next_index();

        let query = format!(
            "SELECT {SUMMARY_COLUMNS} {SUMMARY_FROM} {where_clause} {SUMMARY_GROUP_BY} \
             {order_by} LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let q = bind_values(
            sqlx::query_as::<_, MovieSummary>(&query),
            predicates.values(),
        );
        q.bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Fetch the leading rows of a filtered, sorted result in one query.
    ///
    /// Used to populate the search cache: later pages inside the batch are
    /// then served as in-memory slices.
    pub async fn search_batch(
        pool: &PgPool,
        filter: &MovieFilter,
        order_by: &str,
        batch_rows: i64,
    ) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let predicates = build_movie_filter(filter);
        let where_clause = predicates.where_clause();
        let bind_idx = predicates.next_index();

        let query = format!(
            "SELECT {SUMMARY_COLUMNS} {SUMMARY_FROM} {where_clause} {SUMMARY_GROUP_BY} \
             {order_by} LIMIT ${bind_idx}"
        );

        let q = bind_values(
            sqlx::query_as::<_, MovieSummary>(&query),
            predicates.values(),
        );
        q.bind(batch_rows).fetch_all(pool).await
    }

    /// Count movies matching the given filter (for pagination metadata).
    ///
    /// Membership filters are EXISTS sub-queries, so the count needs no
    /// joins and never over-counts fanned-out rows.
    pub async fn count(pool: &PgPool, filter: &MovieFilter) -> Result<i64, sqlx::Error> {
        let predicates = build_movie_filter(filter);
        let where_clause = predicates.where_clause();

        let query = format!("SELECT COUNT(*)::BIGINT AS count FROM movies m {where_clause}");

        let q = bind_values_scalar(sqlx::query_scalar::<_, i64>(&query), predicates.values());
        q.fetch_one(pool).await
    }

    /// Fetch one page of sparse records carrying only the requested fields.
    ///
    /// `id` is always present in each record. The caller resolves external
    /// field names against the projection allow-list beforehand.
    pub async fn search_projected(
        pool: &PgPool,
        filter: &MovieFilter,
        fields: &[&ProjectedField],
        order_by: &str,
        page: PageRequest,
    ) -> Result<Vec<JsonMap<String, JsonValue>>, sqlx::Error> {
        let mut select_list = String::from("m.id AS id");
        for field in fields {
            if field.name == "id" {
                continue;
            }
            select_list.push_str(&format!(", {} AS {}", field.expr, field.name));
        }

        let predicates = build_movie_filter(filter);
        let where_clause = predicates.where_clause();
        let bind_idx = predicates.next_index();

        // Posters are one-to-one on the movie id, so the join adds no rows.
        let query = format!(
            "SELECT {select_list} FROM movies m \
             LEFT JOIN posters p ON p.id = m.id \
             {where_clause} {order_by} LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let mut q = sqlx::query(&query);
        for val in predicates.values() {
            match val {
                BindValue::BigInt(v) => q = q.bind(*v),
                BindValue::Int(v) => q = q.bind(*v),
                BindValue::Real(v) => q = q.bind(*v),
                BindValue::Text(v) => q = q.bind(v.as_str()),
                BindValue::Bool(v) => q = q.bind(*v),
            }
        }

        let rows = q
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        rows.iter().map(|row| project_row(row, fields)).collect()
    }

    /// Find one movie by id, without related collections.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovieSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} {SUMMARY_FROM} WHERE m.id = $1 {SUMMARY_GROUP_BY}"
        );
        sqlx::query_as::<_, MovieSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find one movie by id with every related collection attached.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieDetail>, sqlx::Error> {
        let Some(movie) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let actors = sqlx::query_as::<_, ActorCredit>(
            "SELECT a.id, a.name, ma.role \
             FROM movies_have_actors ma \
             JOIN actors a ON a.id = ma.actor_id \
             WHERE ma.movie_id = $1 \
             ORDER BY a.name, ma.role",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let crew = sqlx::query_as::<_, CrewCredit>(
            "SELECT role, name FROM crew WHERE id = $1 ORDER BY role, name",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let themes = sqlx::query_scalar::<_, String>(
            "SELECT theme FROM themes WHERE id = $1 ORDER BY theme",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let studios = sqlx::query_scalar::<_, String>(
            "SELECT s.name \
             FROM movie_have_studios ms \
             JOIN studio s ON s.id = ms.studio_id \
             WHERE ms.movie_id = $1 \
             ORDER BY s.name",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let languages = sqlx::query_as::<_, MovieLanguage>(
            "SELECT type AS kind, language FROM languages \
             WHERE id = $1 ORDER BY type, language",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let countries = sqlx::query_scalar::<_, String>(
            "SELECT c.name \
             FROM movie_have_countries mc \
             JOIN country c ON c.id = mc.country_id \
             WHERE mc.movie_id = $1 \
             ORDER BY c.name",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        let releases = sqlx::query_as::<_, MovieRelease>(
            "SELECT r.date, r.type AS kind, r.rating, c.name AS country \
             FROM releases r \
             JOIN country c ON c.id = r.country \
             WHERE r.id = $1 \
             ORDER BY r.date, r.type",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(MovieDetail {
            movie,
            actors,
            crew,
            themes,
            studios,
            languages,
            countries,
            releases,
        }))
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Build the WHERE predicate set from movie filter parameters.
///
/// Inactive filters contribute nothing. Year bounds count as active only
/// when positive; rating and duration bounds only when non-negative. Genre
/// and actor membership go through EXISTS sub-queries so matching rows are
/// never duplicated by join fan-out.
fn build_movie_filter(filter: &MovieFilter) -> PredicateSet {
    let mut predicates = PredicateSet::new();

    if let Some(ref name) = filter.name {
        if !name.is_empty() {
            predicates.contains("m.name", name);
        }
    }

    // Conjunctive genre matching: one EXISTS per requested genre.
    for genre in &filter.genres {
        if genre.is_empty() {
            continue;
        }
        let idx = predicates.next_index();
        predicates.push(
            format!(
                "EXISTS (SELECT 1 FROM movie_has_genres mg2 \
                 JOIN genres g2 ON g2.genre_id = mg2.genre_id \
                 WHERE mg2.movie_id = m.id AND g2.genre = ${idx})"
            ),
            BindValue::Text(genre.clone()),
        );
    }

    if let Some(min_year) = filter.min_year {
        if min_year > 0 {
            predicates.at_least("m.date", BindValue::Int(min_year));
        }
    }
    if let Some(max_year) = filter.max_year {
        if max_year > 0 {
            predicates.at_most("m.date", BindValue::Int(max_year));
        }
    }

    if let Some(min_rating) = filter.min_rating {
        if min_rating >= 0.0 {
            predicates.at_least("m.rating", BindValue::Real(min_rating));
        }
    }
    if let Some(max_rating) = filter.max_rating {
        if max_rating >= 0.0 {
            predicates.at_most("m.rating", BindValue::Real(max_rating));
        }
    }

    if let Some(min_duration) = filter.min_duration {
        if min_duration >= 0 {
            predicates.at_least("m.minute", BindValue::Int(min_duration));
        }
    }
    if let Some(max_duration) = filter.max_duration {
        if max_duration >= 0 {
            predicates.at_most("m.minute", BindValue::Int(max_duration));
        }
    }

    if let Some(actor_id) = filter.actor_id {
        let idx = predicates.next_index();
        predicates.push(
            format!(
                "EXISTS (SELECT 1 FROM movies_have_actors ma2 \
                 WHERE ma2.movie_id = m.id AND ma2.actor_id = ${idx})"
            ),
            BindValue::BigInt(actor_id),
        );
    }

    if let Some(ref actor_name) = filter.actor_name {
        if !actor_name.is_empty() {
            let idx = predicates.next_index();
            predicates.push(
                format!(
                    "EXISTS (SELECT 1 FROM movies_have_actors ma3 \
                     JOIN actors a3 ON a3.id = ma3.actor_id \
                     WHERE ma3.movie_id = m.id AND a3.name ILIKE ${idx})"
                ),
                BindValue::Text(format!(
                    "%{}%",
                    crate::predicates::escape_like(actor_name)
                )),
            );
        }
    }

    predicates
}

/// Convert one projected row into a sparse JSON record.
fn project_row(
    row: &PgRow,
    fields: &[&ProjectedField],
) -> Result<JsonMap<String, JsonValue>, sqlx::Error> {
    let mut record = JsonMap::new();
    record.insert(
        "id".to_string(),
        JsonValue::from(row.try_get::<DbId, _>("id")?),
    );

    for field in fields {
        if field.name == "id" {
            continue;
        }
        let value = match field.kind {
            FieldKind::BigInt => row
                .try_get::<Option<i64>, _>(field.name)?
                .map(JsonValue::from),
            FieldKind::Int => row
                .try_get::<Option<i32>, _>(field.name)?
                .map(JsonValue::from),
            FieldKind::Real => row
                .try_get::<Option<f32>, _>(field.name)?
                .map(JsonValue::from),
            FieldKind::Text => row
                .try_get::<Option<String>, _>(field.name)?
                .map(JsonValue::from),
        };
        record.insert(field.name.to_string(), value.unwrap_or(JsonValue::Null));
    }

    Ok(record)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
