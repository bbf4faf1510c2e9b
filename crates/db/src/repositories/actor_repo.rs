//! Repository for the `actors` table.

use sqlx::PgPool;

use cinescope_core::paging::PageRequest;

use crate::models::actor::Actor;
use crate::predicates::{bind_values, bind_values_scalar, PredicateSet};

const COLUMNS: &str = "id, name";

/// Provides search operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Fetch one page of actors, optionally narrowed by a name substring.
    pub async fn search(
        pool: &PgPool,
        name: Option<&str>,
        order_by: &str,
        page: PageRequest,
    ) -> Result<Vec<Actor>, sqlx::Error> {
        let predicates = build_actor_filter(name);
        let where_clause = predicates.where_clause();
        let bind_idx = predicates.next_index();

        let query = format!(
            "SELECT {COLUMNS} FROM actors {where_clause} \
             {order_by} LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let q = bind_values(sqlx::query_as::<_, Actor>(&query), predicates.values());
        q.bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count actors matching the name filter (for pagination metadata).
    pub async fn count(pool: &PgPool, name: Option<&str>) -> Result<i64, sqlx::Error> {
        let predicates = build_actor_filter(name);
        let where_clause = predicates.where_clause();

        let query = format!("SELECT COUNT(*)::BIGINT AS count FROM actors {where_clause}");

        let q = bind_values_scalar(sqlx::query_scalar::<_, i64>(&query), predicates.values());
        q.fetch_one(pool).await
    }
}

fn build_actor_filter(name: Option<&str>) -> PredicateSet {
    let mut predicates = PredicateSet::new();
    if let Some(name) = name {
        if !name.is_empty() {
            predicates.contains("name", name);
        }
    }
    predicates
}
