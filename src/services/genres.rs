use crate::{
    db::MemoryStore,
    error::AppResult,
    models::{Genre, NewGenre},
    services::providers::MovieProvider,
};

/// Returns the genre catalog, fetching it from the provider only once
///
/// Once the store holds any genre it is served as-is and the provider is
/// not queried again. There is no refresh path.
pub async fn list_genres(store: &MemoryStore, provider: &dyn MovieProvider) -> AppResult<Vec<Genre>> {
    let cached = store.get_all_genres().await;
    if !cached.is_empty() {
        tracing::debug!(count = cached.len(), "Serving genres from cache");
        return Ok(cached);
    }

    let genres = provider.genres().await?;
    for genre in &genres {
        store
            .create_genre(NewGenre {
                id: Some(genre.id),
                name: genre.name.clone(),
            })
            .await;
    }

    tracing::info!(
        count = genres.len(),
        provider = provider.name(),
        "Genres fetched and cached"
    );

    Ok(genres)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, services::providers::MockMovieProvider};

    fn catalog() -> Vec<Genre> {
        vec![
            Genre { id: 28, name: "Action".to_string() },
            Genre { id: 12, name: "Adventure".to_string() },
        ]
    }

    #[tokio::test]
    async fn test_fetches_once_then_serves_cache() {
        let store = MemoryStore::new();
        let mut provider = MockMovieProvider::new();
        provider.expect_genres().times(1).returning(|| Ok(catalog()));
        provider.expect_name().return_const("mock");

        let first = list_genres(&store, &provider).await.unwrap();
        assert_eq!(first, catalog());

        let second = list_genres(&store, &provider).await.unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(store.get_genre(28).await.unwrap().name, "Action");
    }

    #[tokio::test]
    async fn test_existing_genres_skip_provider() {
        let store = MemoryStore::new();
        store
            .create_genre(NewGenre { id: Some(18), name: "Drama".to_string() })
            .await;

        let mut provider = MockMovieProvider::new();
        provider.expect_genres().never();

        let genres = list_genres(&store, &provider).await.unwrap();
        assert_eq!(genres, vec![Genre { id: 18, name: "Drama".to_string() }]);
    }

    #[tokio::test]
    async fn test_provider_failure_leaves_cache_empty() {
        let store = MemoryStore::new();
        let mut provider = MockMovieProvider::new();
        provider
            .expect_genres()
            .returning(|| Err(AppError::ExternalApi("down".to_string())));

        assert!(list_genres(&store, &provider).await.is_err());
        assert!(store.get_all_genres().await.is_empty());
    }
}
