use serde::Deserialize;

use crate::{
    db::MemoryStore,
    error::{AppError, AppResult},
    models::{NewUser, User},
    services::auth,
};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Username and password submitted to register or log in
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Creates a user with a hashed password
pub async fn register(store: &MemoryStore, credentials: Credentials) -> AppResult<User> {
    let username = credentials.username.trim().to_string();
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(AppError::InvalidInput(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LEN
        )));
    }
    if credentials.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::InvalidInput(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let password = auth::hash_password_blocking(credentials.password).await?;
    let user = store
        .create_user(NewUser {
            username: username.clone(),
            password,
        })
        .await
        .ok_or_else(|| AppError::InvalidInput("Username already exists".to_string()))?;

    tracing::info!(user_id = user.id, username = %username, "User registered");

    Ok(user)
}

/// Returns the user when the credentials match
pub async fn login(store: &MemoryStore, credentials: Credentials) -> AppResult<User> {
    let invalid = || AppError::Unauthorized("Invalid username or password".to_string());

    let user = store
        .get_user_by_username(credentials.username.trim())
        .await
        .ok_or_else(invalid)?;

    if !auth::verify_password_blocking(credentials.password, user.password.clone()).await? {
        tracing::warn!(user_id = user.id, "Wrong password");
        return Err(invalid());
    }

    tracing::info!(user_id = user.id, "User logged in");

    Ok(user)
}

pub async fn get_user(store: &MemoryStore, user_id: u64) -> AppResult<User> {
    store.get_user(user_id).await.ok_or_else(|| user_not_found(user_id))
}

/// Replaces the whole watchlist; concurrent replacements are last-writer-wins
pub async fn replace_watchlist(
    store: &MemoryStore,
    user_id: u64,
    movie_ids: Vec<u64>,
) -> AppResult<User> {
    store
        .update_user_watchlist(user_id, movie_ids)
        .await
        .ok_or_else(|| user_not_found(user_id))
}

/// Appends a movie unless it is already listed
pub async fn add_to_watchlist(store: &MemoryStore, user_id: u64, movie_id: u64) -> AppResult<User> {
    store
        .modify_user_watchlist(user_id, |watchlist| {
            if !watchlist.contains(&movie_id) {
                watchlist.push(movie_id);
            }
        })
        .await
        .ok_or_else(|| user_not_found(user_id))
}

pub async fn remove_from_watchlist(
    store: &MemoryStore,
    user_id: u64,
    movie_id: u64,
) -> AppResult<User> {
    store
        .modify_user_watchlist(user_id, |watchlist| watchlist.retain(|&id| id != movie_id))
        .await
        .ok_or_else(|| user_not_found(user_id))
}

fn user_not_found(user_id: u64) -> AppError {
    AppError::NotFound(format!("User {} not found", user_id))
}
