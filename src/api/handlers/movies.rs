use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    api::AppState,
    error::{AppError, AppResult},
    models::Movie,
    services::{
        filters::{browse_query, BrowseParams},
        movies,
    },
};

#[derive(Debug, Deserialize)]
pub struct DetailsBatchQuery {
    ids: Option<String>,
}

/// GET /api/movies/trending
pub async fn trending(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state
        .provider
        .trending()
        .await
        .map_err(|e| e.public("Failed to fetch trending movies"))?;
    Ok(Json(movies))
}

/// GET /api/movies/:id
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    const MESSAGE: &str = "Failed to fetch movie details";

    let id = catalog_id(&id).map_err(|e| e.public(MESSAGE))?;
    let movie = state
        .provider
        .movie_details(id)
        .await
        .map_err(|e| e.public(MESSAGE))?;
    Ok(Json(movie))
}

/// GET /api/movies/:id/similar
pub async fn similar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Movie>>> {
    const MESSAGE: &str = "Failed to fetch similar movies";

    let id = catalog_id(&id).map_err(|e| e.public(MESSAGE))?;
    let movies = movies::similar_movies(state.provider.as_ref(), id)
        .await
        .map_err(|e| e.public(MESSAGE))?;
    Ok(Json(movies))
}

/// Parses a catalog movie id; a malformed one fails as an upstream miss
fn catalog_id(raw: &str) -> AppResult<u64> {
    raw.parse()
        .map_err(|_| AppError::ExternalApi(format!("Movie id {:?} is not a catalog id", raw)))
}

/// GET /api/movies/discover
pub async fn discover(
    State(state): State<AppState>,
    Query(browse): Query<BrowseParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = state
        .provider
        .discover(&browse_query(None, &browse))
        .await
        .map_err(|e| e.public("Failed to fetch discover movies"))?;
    Ok(Json(movies))
}

/// GET /api/movies/details?ids=1,2,3
///
/// Ids that fail to resolve are left out of the response.
pub async fn details_batch(
    State(state): State<AppState>,
    Query(query): Query<DetailsBatchQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let ids = query
        .ids
        .filter(|ids| !ids.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("Movie IDs are required".to_string()))?;

    let ids = movies::parse_movie_ids(&ids);
    let movies = movies::fetch_movie_details_batch(state.provider.as_ref(), &ids).await;

    tracing::info!(
        requested = ids.len(),
        resolved = movies.len(),
        "Movie details batch completed"
    );

    Ok(Json(movies))
}
