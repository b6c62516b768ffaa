use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    api::AppState,
    error::AppResult,
    models::{Genre, Movie},
    services::{
        filters::{browse_query, BrowseParams},
        genres,
    },
};

/// GET /api/genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = genres::list_genres(&state.store, state.provider.as_ref())
        .await
        .map_err(|e| e.public("Failed to fetch genres"))?;
    Ok(Json(genres))
}

/// GET /api/genres/:id/movies
///
/// The genre id is forwarded to the provider unchecked.
pub async fn movies(
    State(state): State<AppState>,
    Path(genre_id): Path<String>,
    Query(browse): Query<BrowseParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = state
        .provider
        .discover(&browse_query(Some(&genre_id), &browse))
        .await
        .map_err(|e| e.public("Failed to fetch movies by genre"))?;
    Ok(Json(movies))
}
