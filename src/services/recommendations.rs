use crate::{
    error::AppResult,
    models::Movie,
    services::{
        filters::{recommendation_query_now, RecommendationPreferences},
        providers::MovieProvider,
    },
};

/// Generates rule-based watch recommendations
///
/// Translates the user's genre, mood and release range selections into a
/// discovery query and returns whatever the provider ranks most popular.
pub async fn get_recommendations(
    provider: &dyn MovieProvider,
    preferences: &RecommendationPreferences,
) -> AppResult<Vec<Movie>> {
    let params = recommendation_query_now(preferences);

    tracing::debug!(?params, "Built recommendation query");

    let movies = provider.discover(&params).await?;

    tracing::info!(
        genre = ?preferences.genre,
        mood = ?preferences.mood,
        release_year_range = ?preferences.release_year_range,
        results = movies.len(),
        "Recommendations generated"
    );

    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockMovieProvider;

    #[tokio::test]
    async fn test_forwards_built_query_to_discover() {
        let mut provider = MockMovieProvider::new();
        provider
            .expect_discover()
            .withf(|params| {
                params.get("with_genres") == Some("35")
                    && params.get("with_keywords") == Some("9715|1701|950")
                    && params.get("primary_release_date_lte") == Some("1989-12-31")
                    && params.get("include_adult") == Some("false")
            })
            .times(1)
            .returning(|_| Ok(vec![]));

        let preferences = RecommendationPreferences {
            genre: Some("35".to_string()),
            mood: Some("happy".to_string()),
            release_year_range: Some("classic".to_string()),
            include_adult: false,
        };

        let movies = get_recommendations(&provider, &preferences).await.unwrap();
        assert!(movies.is_empty());
    }
}
