//! Handlers for genre listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use cinescope_core::error::CoreError;
use cinescope_db::repositories::GenreRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/genres
///
/// The full genre list; an empty catalog maps to 404.
pub async fn list_genres(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = GenreRepo::list_all(&state.pool).await?;
    if genres.is_empty() {
        return Err(CoreError::NoResults.into());
    }

    Ok(Json(genres))
}
