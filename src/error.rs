use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Logs the error and swaps upstream or internal failures for a generic
    /// client-facing message. Client errors pass through unchanged.
    pub fn public(self, message: &str) -> Self {
        match self {
            AppError::NotFound(_) | AppError::InvalidInput(_) | AppError::Unauthorized(_) => {
                tracing::warn!(error = %self, "{}", message);
                self
            }
            _ => {
                tracing::error!(error = %self, "{}", message);
                AppError::Internal(message.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::HttpClient(_) | AppError::ExternalApi(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_replaces_upstream_detail() {
        let err = AppError::ExternalApi("TMDB API returned status 503".to_string())
            .public("Failed to fetch trending movies");
        assert!(matches!(err, AppError::Internal(ref msg) if msg == "Failed to fetch trending movies"));
    }

    #[test]
    fn test_public_keeps_client_errors() {
        let err = AppError::InvalidInput("Search query is required".to_string())
            .public("Failed to search movies");
        assert!(matches!(err, AppError::InvalidInput(ref msg) if msg == "Search query is required"));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::ExternalApi("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
