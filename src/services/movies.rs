use crate::{
    error::AppResult,
    models::Movie,
    services::providers::MovieProvider,
};

/// Maximum number of similar movies returned for a title
pub const SIMILAR_MOVIES_LIMIT: usize = 8;

/// Similar movies, capped to [`SIMILAR_MOVIES_LIMIT`]
pub async fn similar_movies(provider: &dyn MovieProvider, id: u64) -> AppResult<Vec<Movie>> {
    let mut movies = provider.similar_movies(id).await?;
    movies.truncate(SIMILAR_MOVIES_LIMIT);
    Ok(movies)
}

/// Splits a comma-separated id list, keeping the ids that parse
pub fn parse_movie_ids(ids: &str) -> Vec<u64> {
    ids.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .filter_map(|id| match id.parse::<u64>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!(movie_id = %id, "Skipping malformed movie id");
                None
            }
        })
        .collect()
}

/// Fetches a summary for each id in turn, dropping the ones that fail
///
/// Results keep input order. A failed lookup is logged and skipped; the batch
/// as a whole never fails.
pub async fn fetch_movie_details_batch(provider: &dyn MovieProvider, ids: &[u64]) -> Vec<Movie> {
    let mut movies = Vec::with_capacity(ids.len());
    let mut failures = 0usize;

    for &id in ids {
        match provider.movie_summary(id).await {
            Ok(movie) => movies.push(movie),
            Err(e) => {
                failures += 1;
                tracing::error!(error = %e, movie_id = id, "Error fetching details for movie");
            }
        }
    }

    if failures > 0 {
        tracing::warn!(
            success_count = movies.len(),
            error_count = failures,
            "Partial movie details fetch failure"
        );
    }

    movies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, services::providers::MockMovieProvider};
    use mockall::predicate::eq;

    fn movie(id: u64) -> Movie {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Movie {}", id),
            "posterPath": null,
            "backdropPath": null,
            "overview": null,
            "voteAverage": null,
            "voteCount": null,
            "originalLanguage": null,
            "popularity": null
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_movie_ids() {
        assert_eq!(parse_movie_ids("1, 2,999"), vec![1, 2, 999]);
        assert_eq!(parse_movie_ids("603,abc,,27205"), vec![603, 27205]);
        assert!(parse_movie_ids("").is_empty());
    }

    #[tokio::test]
    async fn test_batch_drops_failures_and_keeps_order() {
        let mut provider = MockMovieProvider::new();
        provider
            .expect_movie_summary()
            .with(eq(1))
            .returning(|id| Ok(movie(id)));
        provider
            .expect_movie_summary()
            .with(eq(2))
            .returning(|id| Ok(movie(id)));
        provider
            .expect_movie_summary()
            .with(eq(999))
            .returning(|_| Err(AppError::ExternalApi("TMDB API returned status 404".to_string())));

        let movies = fetch_movie_details_batch(&provider, &[1, 999, 2]).await;
        let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_similar_movies_capped() {
        let mut provider = MockMovieProvider::new();
        provider
            .expect_similar_movies()
            .with(eq(603))
            .returning(|_| Ok((1..=20).map(movie).collect()));

        let movies = similar_movies(&provider, 603).await.unwrap();
        assert_eq!(movies.len(), SIMILAR_MOVIES_LIMIT);
        assert_eq!(movies[0].id, 1);
        assert_eq!(movies[7].id, 8);
    }
}
