//! Handlers for Oscar award search.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use cinescope_core::error::CoreError;
use cinescope_core::paging::{Page, PageRequest};
use cinescope_core::sorting::{order_by_clause, OSCAR_SORT_FIELDS, OSCAR_TIE_BREAK_COLUMN};
use cinescope_db::models::oscar_award::OscarAwardFilter;
use cinescope_db::repositories::OscarAwardRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for award search.
#[derive(Debug, Deserialize)]
pub struct OscarQueryParams {
    pub name: Option<String>,
    pub film_name: Option<String>,
    pub category: Option<String>,
    pub min_year_film: Option<i32>,
    pub max_year_film: Option<i32>,
    pub min_year_ceremony: Option<i32>,
    pub max_year_ceremony: Option<i32>,
    pub min_ceremony: Option<i32>,
    pub max_ceremony: Option<i32>,
    pub winner: Option<bool>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub page_num: Option<i64>,
    pub page_sz: Option<i64>,
}

/// GET /api/oscar_awards
///
/// Paged award search over names, films, categories, year and ceremony
/// ranges, and the winner flag.
pub async fn search_oscar_awards(
    State(state): State<AppState>,
    Query(params): Query<OscarQueryParams>,
) -> AppResult<impl IntoResponse> {
    let filter = OscarAwardFilter {
        name: params.name.clone(),
        film: params.film_name.clone(),
        category: params.category.clone(),
        min_year_film: params.min_year_film,
        max_year_film: params.max_year_film,
        min_year_ceremony: params.min_year_ceremony,
        max_year_ceremony: params.max_year_ceremony,
        min_ceremony: params.min_ceremony,
        max_ceremony: params.max_ceremony,
        winner: params.winner,
    };

    let order_by = order_by_clause(
        OSCAR_SORT_FIELDS,
        OSCAR_TIE_BREAK_COLUMN,
        params.sort_by.as_deref(),
        params.sort_direction.as_deref(),
    )?;

    let page = PageRequest::from_params(params.page_num, params.page_sz);

    let awards = OscarAwardRepo::search(&state.pool, &filter, &order_by, page).await?;
    if awards.is_empty() {
        return Err(CoreError::NoResults.into());
    }

    let total = OscarAwardRepo::count(&state.pool, &filter).await?;

    Ok(Json(Page::new(awards, page, total)))
}
