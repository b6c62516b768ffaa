use crate::{
    error::{AppError, AppResult},
    models::Movie,
    services::{filters::search_query, providers::MovieProvider},
};

/// Service function for title search
///
/// Rejects a missing or blank query before any upstream call is made, then
/// delegates to the configured provider.
pub async fn search_titles(
    provider: &dyn MovieProvider,
    query: Option<&str>,
    page: Option<&str>,
    year: Option<&str>,
) -> AppResult<Vec<Movie>> {
    let query = query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput("Search query is required".to_string()))?;

    provider.search(&search_query(query, page, year)).await
}
