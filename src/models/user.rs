use serde::{Deserialize, Serialize};

/// Registered user
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub username: String,
    /// Stored password hash, never sent to clients
    #[serde(skip_serializing)]
    pub password: String,
    pub watchlist: Vec<u64>,
    pub preferences: UserPreferences,
}

/// User to insert into the store; `password` is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// Optional taste preferences for a user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_genres: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_movies: Option<Vec<u64>>,
}
