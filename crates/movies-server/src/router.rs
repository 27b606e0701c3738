//! Router assembly for the movies HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. `/movie` and `/movie/{id}`
/// are distinct paths, so the create route cannot be shadowed by the
/// id routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::home_page))
        .route("/movies", get(handlers::movies::list_movies))
        .route("/movie", post(handlers::movies::create_movie))
        .route(
            "/movie/{id}",
            get(handlers::movies::get_movie)
                .put(handlers::movies::update_movie)
                .delete(handlers::movies::delete_movie),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
