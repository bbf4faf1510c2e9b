//! Handlers for actor search endpoints.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use cinescope_core::error::CoreError;
use cinescope_core::paging::{Page, PageRequest};
use cinescope_core::sorting::{order_by_clause, ACTOR_SORT_FIELDS, ACTOR_TIE_BREAK_COLUMN};
use cinescope_db::repositories::ActorRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for actor search.
#[derive(Debug, Deserialize)]
pub struct ActorQueryParams {
    pub name: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub page_num: Option<i64>,
    pub page_sz: Option<i64>,
}

/// GET /api/actors
///
/// Paged actor listing, optionally narrowed by a name substring.
pub async fn search_actors(
    State(state): State<AppState>,
    Query(params): Query<ActorQueryParams>,
) -> AppResult<impl IntoResponse> {
    let order_by = order_by_clause(
        ACTOR_SORT_FIELDS,
        ACTOR_TIE_BREAK_COLUMN,
        params.sort_by.as_deref(),
        params.sort_direction.as_deref(),
    )?;

    let page = PageRequest::from_params(params.page_num, params.page_sz);
    let name = params.name.as_deref().filter(|n| !n.is_empty());

    let actors = ActorRepo::search(&state.pool, name, &order_by, page).await?;
    if actors.is_empty() {
        return Err(CoreError::NoResults.into());
    }

    let total = ActorRepo::count(&state.pool, name).await?;

    Ok(Json(Page::new(actors, page, total)))
}
