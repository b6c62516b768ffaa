use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{api::AppState, error::AppResult, models::Movie, services::title_search};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    query: Option<String>,
    page: Option<String>,
    year: Option<String>,
}

/// GET /api/search/movie
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = title_search::search_titles(
        state.provider.as_ref(),
        params.query.as_deref(),
        params.page.as_deref(),
        params.year.as_deref(),
    )
    .await
    .map_err(|e| e.public("Failed to search movies"))?;
    Ok(Json(movies))
}
