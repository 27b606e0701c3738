//! Movie CRUD handlers (list, get, create, update, delete).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use movies_store::{Movie, MovieFields};

use crate::error::ApiError;
use crate::schema::body::{EchoBody, JsonBody};
use crate::state::AppState;

/// Lists all movies in store order.
///
/// `GET /movies`
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    tracing::info!("endpoint hit: /movies");
    let store = state.store.lock().await;
    Ok(Json(store.list()?))
}

/// Returns one movie, or 404 if no movie has this id.
///
/// `GET /movie/{id}`
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    tracing::info!(%id, "endpoint hit: GET /movie/{{id}}");
    let store = state.store.lock().await;
    Ok(Json(store.get(&id)?))
}

/// Appends a movie and echoes the request body.
///
/// `POST /movie`
pub async fn create_movie(
    State(state): State<AppState>,
    body: JsonBody<Movie>,
) -> Result<EchoBody, ApiError> {
    tracing::info!(movie = %body.value, "endpoint hit: POST /movie");
    let mut store = state.store.lock().await;
    store.insert(body.value)?;
    Ok(EchoBody(body.raw))
}

/// Replaces the mutable fields of a movie and echoes the request body.
///
/// An unknown id leaves the store unchanged and still answers 200.
///
/// `PUT /movie/{id}`
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: JsonBody<MovieFields>,
) -> Result<EchoBody, ApiError> {
    tracing::info!(%id, "endpoint hit: PUT /movie/{{id}}");
    let mut store = state.store.lock().await;
    if store.update(&id, body.value)?.is_none() {
        tracing::debug!(%id, "update matched no movie");
    }
    Ok(EchoBody(body.raw))
}

/// Removes every movie with this id. Unknown ids are a no-op.
///
/// `DELETE /movie/{id}`
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(%id, "endpoint hit: DELETE /movie/{{id}}");
    let mut store = state.store.lock().await;
    let removed = store.delete(&id)?;
    tracing::debug!(%id, removed, "delete finished");
    Ok(StatusCode::OK)
}
