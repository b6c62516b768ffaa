/// TMDB API provider
///
/// API Flow:
/// 1. Lists: /trending/movie/day, /discover/movie, /search/movie,
///    /movie/{id}/similar → list-context movies (genre ids only)
/// 2. Details: /movie/{id}?append_to_response=credits → detail-context movie,
///    or plain /movie/{id} for the batch summary
/// 3. Genres: /genre/movie/list
///
/// Every request carries the API key as the `api_key` query parameter.
use crate::{
    error::{AppError, AppResult},
    models::{DetailContextMovie, Genre, ListContextMovie, Movie, TmdbGenreList, TmdbPage},
    services::{filters::QueryParams, providers::MovieProvider},
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// GETs `endpoint` and decodes the JSON body, failing on any non-success status
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> AppResult<T> {
        let url = format!("{}{}", self.api_url, endpoint);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, endpoint = %endpoint, "Error fetching from TMDB");
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                endpoint = %endpoint,
                "TMDB API returned an error status"
            );
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    async fn get_movie_list(&self, endpoint: &str, params: &QueryParams) -> AppResult<Vec<Movie>> {
        let page: TmdbPage<ListContextMovie> = self.get_json(endpoint, params).await?;
        let movies: Vec<Movie> = page
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Movie::from)
            .collect();

        tracing::info!(
            endpoint = %endpoint,
            results = movies.len(),
            provider = "tmdb",
            "Movie list fetched"
        );

        Ok(movies)
    }
}

#[async_trait::async_trait]
impl MovieProvider for TmdbProvider {
    async fn trending(&self) -> AppResult<Vec<Movie>> {
        self.get_movie_list("/trending/movie/day", &QueryParams::new())
            .await
    }

    async fn movie_details(&self, id: u64) -> AppResult<Movie> {
        let mut params = QueryParams::new();
        params.set("append_to_response", "credits");

        let details: DetailContextMovie = self
            .get_json(&format!("/movie/{}", id), &params)
            .await?;

        tracing::info!(movie_id = id, provider = "tmdb", "Movie details fetched");

        Ok(Movie::from(details))
    }

    async fn movie_summary(&self, id: u64) -> AppResult<Movie> {
        let details: DetailContextMovie = self
            .get_json(&format!("/movie/{}", id), &QueryParams::new())
            .await?;
        Ok(details.into_summary())
    }

    async fn similar_movies(&self, id: u64) -> AppResult<Vec<Movie>> {
        self.get_movie_list(&format!("/movie/{}/similar", id), &QueryParams::new())
            .await
    }

    async fn genres(&self) -> AppResult<Vec<Genre>> {
        let list: TmdbGenreList = self
            .get_json("/genre/movie/list", &QueryParams::new())
            .await?;
        Ok(list.genres.unwrap_or_default().into_iter().map(Genre::from).collect())
    }

    async fn discover(&self, params: &QueryParams) -> AppResult<Vec<Movie>> {
        self.get_movie_list("/discover/movie", params).await
    }

    async fn search(&self, params: &QueryParams) -> AppResult<Vec<Movie>> {
        self.get_movie_list("/search/movie", params).await
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::get,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;

    /// Serves a tiny fake TMDB on a random local port and returns its base URL
    async fn spawn_fake_tmdb() -> String {
        async fn trending(Query(query): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
            if query.get("api_key").map(String::as_str) != Some("test_key") {
                return (StatusCode::UNAUTHORIZED, Json(json!({ "status_code": 7 })));
            }
            (
                StatusCode::OK,
                Json(json!({
                    "page": 1,
                    "results": [
                        { "id": 603, "title": "The Matrix", "genre_ids": [28, 878], "release_date": "1999-03-30" },
                        { "id": 27205, "title": "Inception", "genre_ids": [28] }
                    ]
                })),
            )
        }

        async fn details(
            Path(id): Path<u64>,
            Query(query): Query<HashMap<String, String>>,
        ) -> (StatusCode, Json<Value>) {
            if id == 999 {
                return (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "status_message": "The resource you requested could not be found." })),
                );
            }
            let credits = if query.get("append_to_response").map(String::as_str) == Some("credits") {
                json!({
                    "cast": [{ "id": 6384, "name": "Keanu Reeves", "character": "Neo", "profile_path": null, "order": 0 }],
                    "crew": [{ "id": 9339, "name": "Lilly Wachowski", "job": "Director", "department": "Directing", "profile_path": null }]
                })
            } else {
                Value::Null
            };
            (
                StatusCode::OK,
                Json(json!({
                    "id": id,
                    "title": "The Matrix",
                    "runtime": 136,
                    "genres": [{ "id": 28, "name": "Action" }],
                    "credits": credits
                })),
            )
        }

        async fn discover(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
            // Echo the genre filter back as the title so the test can see it arrived
            let title = query.get("with_genres").cloned().unwrap_or_default();
            Json(json!({ "results": [{ "id": 1, "title": title }] }))
        }

        async fn genres() -> Json<Value> {
            Json(json!({ "genres": [{ "id": 28, "name": "Action" }, { "id": 12, "name": "Adventure" }] }))
        }

        let app = Router::new()
            .route("/trending/movie/day", get(trending))
            .route("/movie/:id", get(details))
            .route("/discover/movie", get(discover))
            .route("/genre/movie/list", get(genres));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_trending_maps_list_context() {
        let provider = TmdbProvider::new("test_key".to_string(), spawn_fake_tmdb().await);

        let movies = provider.trending().await.unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "The Matrix");
        assert_eq!(movies[0].genres.len(), 2);
        assert!(movies[0].genres[0].name.is_none());
        assert_eq!(movies[1].release_date, "");
    }

    #[tokio::test]
    async fn test_movie_details_requests_credits() {
        let provider = TmdbProvider::new("test_key".to_string(), spawn_fake_tmdb().await);

        let movie = provider.movie_details(603).await.unwrap();
        assert_eq!(movie.id, 603);
        assert_eq!(movie.genres[0].name.as_deref(), Some("Action"));
        assert_eq!(movie.director.unwrap().name, "Lilly Wachowski");
        assert_eq!(movie.credits.unwrap().cast[0].character.as_deref(), Some("Neo"));
    }

    #[tokio::test]
    async fn test_movie_summary_skips_credits() {
        let provider = TmdbProvider::new("test_key".to_string(), spawn_fake_tmdb().await);

        let movie = provider.movie_summary(603).await.unwrap();
        assert_eq!(movie.id, 603);
        assert_eq!(movie.genres[0].name.as_deref(), Some("Action"));
        assert!(movie.credits.is_none());
        assert!(movie.director.is_none());
        assert!(movie.runtime.is_none());
    }

    #[tokio::test]
    async fn test_non_success_status_is_external_error() {
        let provider = TmdbProvider::new("test_key".to_string(), spawn_fake_tmdb().await);

        let result = provider.movie_details(999).await;
        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_wrong_api_key_fails() {
        let provider = TmdbProvider::new("wrong".to_string(), spawn_fake_tmdb().await);
        assert!(matches!(provider.trending().await, Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_discover_forwards_params() {
        let provider = TmdbProvider::new("test_key".to_string(), spawn_fake_tmdb().await);
        let mut params = QueryParams::new();
        params.set("with_genres", "878");

        let movies = provider.discover(&params).await.unwrap();
        assert_eq!(movies[0].title, "878");
    }

    #[tokio::test]
    async fn test_genres() {
        let provider = TmdbProvider::new("test_key".to_string(), format!("{}/", spawn_fake_tmdb().await));

        let genres = provider.genres().await.unwrap();
        assert_eq!(
            genres,
            vec![
                Genre { id: 28, name: "Action".to_string() },
                Genre { id: 12, name: "Adventure".to_string() },
            ]
        );
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_client_error() {
        let provider = TmdbProvider::new("test_key".to_string(), "http://127.0.0.1:1".to_string());
        assert!(matches!(provider.trending().await, Err(AppError::HttpClient(_))));
    }
}
