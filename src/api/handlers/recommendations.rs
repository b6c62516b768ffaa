use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{
    api::AppState,
    error::{AppError, AppResult},
    middleware::RequestId,
    models::Movie,
    services::{filters::RecommendationPreferences, recommendations},
};

/// POST /api/recommendations
pub async fn recommend(
    State(state): State<AppState>,
    request_id: RequestId,
    payload: Result<Json<RecommendationPreferences>, JsonRejection>,
) -> AppResult<Json<Vec<Movie>>> {
    let Json(preferences) = payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

    tracing::info!(
        request_id = %request_id,
        include_adult = preferences.include_adult,
        "Processing recommendation request"
    );

    let movies = recommendations::get_recommendations(state.provider.as_ref(), &preferences)
        .await
        .map_err(|e| e.public("Failed to generate recommendations"))?;

    Ok(Json(movies))
}
