use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    api::AppState,
    error::{AppError, AppResult},
    models::User,
    services::users::{self, Credentials},
};

use super::path_param;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistUpdate {
    pub movie_ids: Vec<u64>,
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))
}

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = users::register(&state.store, json_body(payload)?)
        .await
        .map_err(|e| e.public("Failed to register user"))?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> AppResult<Json<User>> {
    let user = users::login(&state.store, json_body(payload)?)
        .await
        .map_err(|e| e.public("Failed to log in"))?;
    Ok(Json(user))
}

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> AppResult<Json<User>> {
    let user_id = path_param(path, "user id")?;
    Ok(Json(users::get_user(&state.store, user_id).await?))
}

/// GET /api/users/:id/watchlist
pub async fn get_watchlist(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> AppResult<Json<Vec<u64>>> {
    let user_id = path_param(path, "user id")?;
    let user = users::get_user(&state.store, user_id).await?;
    Ok(Json(user.watchlist))
}

/// PUT /api/users/:id/watchlist
pub async fn replace_watchlist(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<WatchlistUpdate>, JsonRejection>,
) -> AppResult<Json<Vec<u64>>> {
    let user_id = path_param(path, "user id")?;
    let update = json_body(payload)?;
    let user = users::replace_watchlist(&state.store, user_id, update.movie_ids).await?;
    Ok(Json(user.watchlist))
}

/// POST /api/users/:id/watchlist/:movie_id
pub async fn add_to_watchlist(
    State(state): State<AppState>,
    path: Result<Path<(u64, u64)>, PathRejection>,
) -> AppResult<Json<Vec<u64>>> {
    let (user_id, movie_id) = path_param(path, "user or movie id")?;
    let user = users::add_to_watchlist(&state.store, user_id, movie_id).await?;
    Ok(Json(user.watchlist))
}

/// DELETE /api/users/:id/watchlist/:movie_id
pub async fn remove_from_watchlist(
    State(state): State<AppState>,
    path: Result<Path<(u64, u64)>, PathRejection>,
) -> AppResult<Json<Vec<u64>>> {
    let (user_id, movie_id) = path_param(path, "user or movie id")?;
    let user = users::remove_from_watchlist(&state.store, user_id, movie_id).await?;
    Ok(Json(user.watchlist))
}
