use axum::{
    extract::{rejection::PathRejection, Path},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};

pub mod genres;
pub mod movies;
pub mod recommendations;
pub mod search;
pub mod users;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Unwraps a path extraction, turning malformed segments into a 400
fn path_param<T: DeserializeOwned + Send>(
    path: Result<Path<T>, PathRejection>,
    what: &str,
) -> AppResult<T> {
    path.map(|Path(value)| value).map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected path parameter");
        AppError::InvalidInput(format!("Invalid {}", what))
    })
}
