//! Repository for the `oscar_awards` table.

use sqlx::PgPool;

use cinescope_core::paging::PageRequest;

use crate::models::oscar_award::{OscarAward, OscarAwardFilter};
use crate::predicates::{bind_values, bind_values_scalar, BindValue, PredicateSet};

const COLUMNS: &str = "\
    id, year_film, year_ceremony, ceremony, category, name, film, winner";

/// Provides search operations for Oscar award records.
pub struct OscarAwardRepo;

impl OscarAwardRepo {
    /// Fetch one page of award records matching the given filter.
    pub async fn search(
        pool: &PgPool,
        filter: &OscarAwardFilter,
        order_by: &str,
        page: PageRequest,
    ) -> Result<Vec<OscarAward>, sqlx::Error> {
        let predicates = build_oscar_filter(filter);
        let where_clause = predicates.where_clause();
        let bind_idx = predicates.next_index();

        let query = format!(
            "SELECT {COLUMNS} FROM oscar_awards {where_clause} \
             {order_by} LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let q = bind_values(sqlx::query_as::<_, OscarAward>(&query), predicates.values());
        q.bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count award records matching the filter (for pagination metadata).
    pub async fn count(pool: &PgPool, filter: &OscarAwardFilter) -> Result<i64, sqlx::Error> {
        let predicates = build_oscar_filter(filter);
        let where_clause = predicates.where_clause();

        let query = format!("SELECT COUNT(*)::BIGINT AS count FROM oscar_awards {where_clause}");

        let q = bind_values_scalar(sqlx::query_scalar::<_, i64>(&query), predicates.values());
        q.fetch_one(pool).await
    }
}

/// Build the WHERE predicate set from award filter parameters.
///
/// String filters are case-insensitive substring matches; year and
/// ceremony bounds count as active only when positive.
fn build_oscar_filter(filter: &OscarAwardFilter) -> PredicateSet {
    let mut predicates = PredicateSet::new();

    if let Some(ref name) = filter.name {
        if !name.is_empty() {
            predicates.contains("name", name);
        }
    }
    if let Some(ref film) = filter.film {
        if !film.is_empty() {
            predicates.contains("film", film);
        }
    }
    if let Some(ref category) = filter.category {
        if !category.is_empty() {
            predicates.contains("category", category);
        }
    }

    if let Some(min) = filter.min_year_film {
        if min > 0 {
            predicates.at_least("year_film", BindValue::Int(min));
        }
    }
    if let Some(max) = filter.max_year_film {
        if max > 0 {
            predicates.at_most("year_film", BindValue::Int(max));
        }
    }

    if let Some(min) = filter.min_year_ceremony {
        if min > 0 {
            predicates.at_least("year_ceremony", BindValue::Int(min));
        }
    }
    if let Some(max) = filter.max_year_ceremony {
        if max > 0 {
            predicates.at_most("year_ceremony", BindValue::Int(max));
        }
    }

    if let Some(min) = filter.min_ceremony {
        if min > 0 {
            predicates.at_least("ceremony", BindValue::Int(min));
        }
    }
    if let Some(max) = filter.max_ceremony {
        if max > 0 {
            predicates.at_most("ceremony", BindValue::Int(max));
        }
    }

    if let Some(winner) = filter.winner {
        predicates.equals("winner", BindValue::Bool(winner));
    }

    predicates
}
