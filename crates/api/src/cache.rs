//! Bounded, TTL-evicting cache for movie search batches.
//!
//! A filtered, sorted search fetches its leading rows once; page windows
//! inside that batch are then served as in-memory slices instead of
//! repeating the query for every page flip. Entries are keyed by the
//! normalized filter plus the ORDER BY clause and expire by capacity
//! (LRU-style) and TTL.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use cinescope_core::paging::{PageRequest, SEARCH_BATCH_ROWS};
use cinescope_db::models::movie::{MovieFilter, MovieSummary};
use cinescope_db::repositories::MovieRepo;
use cinescope_db::DbPool;

/// Shared cache of search result batches.
pub struct SearchCache {
    batches: Cache<String, Arc<Vec<MovieSummary>>>,
}

impl SearchCache {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let batches = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();
        Self { batches }
    }

    /// Serve one page window from the batch cached under `key`, running the
    /// batch query only when the entry is absent.
    ///
    /// Population is single-flight per key: concurrent requests for the
    /// same key share one query, and all waiters receive its result (or
    /// its error).
    pub async fn page_window(
        &self,
        pool: &DbPool,
        key: String,
        filter: &MovieFilter,
        order_by: &str,
        page: PageRequest,
    ) -> Result<Vec<MovieSummary>, Arc<sqlx::Error>> {
        let batch = self
            .batches
            .try_get_with(key, async {
                tracing::debug!(order_by, "Populating search batch");
                MovieRepo::search_batch(pool, filter, order_by, SEARCH_BATCH_ROWS)
                    .await
                    .map(Arc::new)
            })
            .await?;

        let len = batch.len() as i64;
        let start = page.offset().min(len) as usize;
        let end = (page.offset() + page.limit()).min(len) as usize;
        Ok(batch[start..end].to_vec())
    }

    /// Whether the requested window lies entirely inside a cached batch.
    /// Windows past the batch must go to the database directly.
    pub fn window_within_batch(page: PageRequest) -> bool {
        page.offset() + page.limit() <= SEARCH_BATCH_ROWS
    }
}

/// Derive the cache key for a filter + sort combination.
///
/// The filter must already be normalized so that parameter sets selecting
/// the same rows produce the same key.
pub fn batch_key(filter: &MovieFilter, order_by: &str) -> String {
    format!(
        "name={:?};genres={:?};year={:?}..{:?};rating={:?}..{:?};\
         minute={:?}..{:?};actor={:?},{:?};{order_by}",
        filter.name,
        filter.genres,
        filter.min_year,
        filter.max_year,
        filter.min_rating,
        filter.max_rating,
        filter.min_duration,
        filter.max_duration,
        filter.actor_id,
        filter.actor_name,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
