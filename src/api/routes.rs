use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::middleware::{assign_request_id, request_span};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(assign_request_id))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// Routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        // Movies
        .route("/movies/trending", get(handlers::movies::trending))
        .route("/movies/discover", get(handlers::movies::discover))
        .route("/movies/details", get(handlers::movies::details_batch))
        .route("/movies/:id", get(handlers::movies::details))
        .route("/movies/:id/similar", get(handlers::movies::similar))
        // Genres
        .route("/genres", get(handlers::genres::list))
        .route("/genres/:id/movies", get(handlers::genres::movies))
        // Search
        .route("/search/movie", get(handlers::search::search))
        // Recommendations
        .route("/recommendations", post(handlers::recommendations::recommend))
        // Users
        .route("/register", post(handlers::users::register))
        .route("/login", post(handlers::users::login))
        .route("/users/:id", get(handlers::users::get_user))
        .route(
            "/users/:id/watchlist",
            get(handlers::users::get_watchlist).put(handlers::users::replace_watchlist),
        )
        .route(
            "/users/:id/watchlist/:movie_id",
            post(handlers::users::add_to_watchlist).delete(handlers::users::remove_from_watchlist),
        )
}
