//! Handlers for movie search, detail, and field-projection endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::Query;
use serde::Deserialize;

use cinescope_core::error::CoreError;
use cinescope_core::paging::{Page, PageRequest};
use cinescope_core::projection::{resolve_projection, MOVIE_PROJECTION_FIELDS};
use cinescope_core::sorting::{order_by_clause, MOVIE_SORT_FIELDS, MOVIE_TIE_BREAK_COLUMN};
use cinescope_core::types::DbId;
use cinescope_db::models::movie::MovieFilter;
use cinescope_db::repositories::MovieRepo;

use crate::cache::{batch_key, SearchCache};
use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter types
// ---------------------------------------------------------------------------

/// Query parameters for movie search.
///
/// `genres` and `fields` repeat (`?genres=Drama&genres=Crime`), which is why
/// this handler uses the `axum_extra` query extractor.
#[derive(Debug, Deserialize)]
pub struct MovieQueryParams {
    pub movie_name: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub min_rating: Option<f32>,
    pub max_rating: Option<f32>,
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
    pub actor_id: Option<i64>,
    pub actor_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub page_num: Option<i64>,
    pub page_sz: Option<i64>,
}

// ---------------------------------------------------------------------------
// Search movies
// ---------------------------------------------------------------------------

/// GET /api/movies
///
/// Paged movie search over every filter family. With `fields=` the page
/// carries sparse records instead of full summaries. An empty page maps to
/// 404 per the catalog's empty-result rule.
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieQueryParams>,
) -> AppResult<impl IntoResponse> {
    // Implausible actor ids are a miss, not an error.
    if let Some(actor_id) = params.actor_id {
        if actor_id <= 0 {
            return Err(CoreError::NotFound {
                entity: "Actor",
                id: actor_id,
            }
            .into());
        }
    }

    let filter = MovieFilter {
        name: params.movie_name.clone(),
        genres: params.genres.clone(),
        min_year: params.min_year,
        max_year: params.max_year,
        min_rating: params.min_rating,
        max_rating: params.max_rating,
        min_duration: params.min_duration,
        max_duration: params.max_duration,
        actor_id: params.actor_id,
        actor_name: params.actor_name.clone(),
    }
    .normalized();

    let order_by = order_by_clause(
        MOVIE_SORT_FIELDS,
        MOVIE_TIE_BREAK_COLUMN,
        params.sort_by.as_deref(),
        params.sort_direction.as_deref(),
    )?;

    let page = PageRequest::from_params(params.page_num, params.page_sz);

    // Sparse projection short-circuits full row assembly.
    if !params.fields.is_empty() {
        let fields = resolve_projection(MOVIE_PROJECTION_FIELDS, &params.fields)?;
        let records =
            MovieRepo::search_projected(&state.pool, &filter, &fields, &order_by, page).await?;
        if records.is_empty() {
            return Err(CoreError::NoResults.into());
        }
        let total = MovieRepo::count(&state.pool, &filter).await?;
        return Ok(Json(Page::new(records, page, total)).into_response());
    }

    // Sorted requests whose window fits the batch are served from the
    // search cache; everything else queries the page directly.
    let cache_eligible = state.config.search_cache_enabled
        && params.sort_by.as_deref().is_some_and(|s| !s.is_empty())
        && SearchCache::window_within_batch(page);

    let content = if cache_eligible {
        let key = batch_key(&filter, &order_by);
        state
            .search_cache
            .page_window(&state.pool, key, &filter, &order_by, page)
            .await?
    } else {
        MovieRepo::search(&state.pool, &filter, &order_by, page).await?
    };

    if content.is_empty() {
        return Err(CoreError::NoResults.into());
    }

    let total = MovieRepo::count(&state.pool, &filter).await?;

    Ok(Json(Page::new(content, page, total)).into_response())
}

// ---------------------------------------------------------------------------
// Movie detail
// ---------------------------------------------------------------------------

/// GET /api/movies/{id}
///
/// Full movie detail with every related collection attached.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // Implausible ids are a miss, not an error.
    if id <= 0 {
        return Err(CoreError::NotFound { entity: "Movie", id }.into());
    }

    let detail = MovieRepo::find_detail_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Movie", id })?;

    Ok(Json(detail))
}
