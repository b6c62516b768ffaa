/// Movie metadata provider abstraction
///
/// Handlers talk to the upstream catalog only through [`MovieProvider`], and
/// every implementation returns canonical [`Movie`] and [`Genre`] values.
use crate::{
    error::AppResult,
    models::{Genre, Movie},
    services::filters::QueryParams,
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers
///
/// Failures surface as errors with no retry and no partial fallback; callers
/// decide what the client sees.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Movies trending today
    async fn trending(&self) -> AppResult<Vec<Movie>>;

    /// Full movie details including credits and director
    async fn movie_details(&self, id: u64) -> AppResult<Movie>;

    /// List-shaped movie with genre names, no credits or detail-only fields
    async fn movie_summary(&self, id: u64) -> AppResult<Movie>;

    /// Movies similar to the given one
    async fn similar_movies(&self, id: u64) -> AppResult<Vec<Movie>>;

    /// The provider's full movie genre catalog
    async fn genres(&self) -> AppResult<Vec<Genre>>;

    /// Discovery listing filtered by the given parameters
    async fn discover(&self, params: &QueryParams) -> AppResult<Vec<Movie>>;

    /// Title search
    async fn search(&self, params: &QueryParams) -> AppResult<Vec<Movie>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
