//! Handlers for poster lookup.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use cinescope_core::error::CoreError;
use cinescope_core::types::DbId;
use cinescope_db::repositories::PosterRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for poster lookup. `id` is required; a missing or
/// non-numeric value is rejected by the extractor with a 400.
#[derive(Debug, Deserialize)]
pub struct PosterQueryParams {
    pub id: DbId,
}

/// GET /api/movie_poster?id=...
///
/// The poster belonging to one movie id.
pub async fn get_movie_poster(
    State(state): State<AppState>,
    Query(params): Query<PosterQueryParams>,
) -> AppResult<impl IntoResponse> {
    // Implausible ids are a miss, not an error.
    if params.id <= 0 {
        return Err(CoreError::NotFound {
            entity: "Poster",
            id: params.id,
        }
        .into());
    }

    let poster = PosterRepo::find_by_id(&state.pool, params.id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Poster",
            id: params.id,
        })?;

    Ok(Json(poster))
}
