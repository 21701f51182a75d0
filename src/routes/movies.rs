use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::{ItemId, body_error};
use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{Movie, MovieListQuery, MoviePayload},
};

#[utoipa::path(
    get,
    path = "/movies/",
    tag = "movies",
    params(
        ("director_id" = Option<i32>, Query, description = "Director filter, wins over genre_id"),
        ("genre_id" = Option<i32>, Query, description = "Only movies in this genre"),
    ),
    responses(
        (status = 200, description = "Movies ordered by id", body = [Movie]),
        (status = 400, description = "Filter value is not an integer", body = String),
    )
)]
pub async fn list(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MovieListQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Movie>>> {
    let Query(q) = query.map_err(|rej| AppError::BadQuery(rej.body_text()))?;
    let filter = q.filter()?;
    let movies = state.movies.find_filtered(filter).await.map_err(|e| e.into_internal())?;
    tracing::debug!(?filter, count = movies.len(), "listed movies");
    Ok(Json(movies.into_iter().map(Movie::from).collect()))
}

#[utoipa::path(
    post,
    path = "/movies/",
    tag = "movies",
    request_body = MoviePayload,
    responses(
        (status = 201, description = "Created; `Location` names the new movie"),
    )
)]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MoviePayload>,
) -> AppResult<impl IntoResponse> {
    let id = state.movies.insert(payload).await.map_err(|e| e.into_internal())?;
    tracing::info!(id, "movie created");
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/movies/{id}"))]))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 200, description = "The movie", body = Movie),
        (status = 404, description = "Lookup failed", body = String),
    )
)]
pub async fn read(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<Json<Movie>> {
    let movie = state.movies.find_by_id(id).await?;
    Ok(Json(movie.into()))
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    request_body = MoviePayload,
    responses(
        (status = 204, description = "Every field replaced; omitted keys become null"),
        (status = 404, description = "Lookup or body failed", body = String),
    )
)]
pub async fn update(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    payload: Result<Json<MoviePayload>, JsonRejection>,
) -> AppResult<StatusCode> {
    // A missing row is reported before a bad body.
    state.movies.find_by_id(id).await?;
    let Json(payload) = payload.map_err(body_error)?;
    state.movies.replace(id, payload).await?;
    tracing::info!(id, "movie replaced");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Lookup failed", body = String),
    )
)]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<StatusCode> {
    state.movies.delete_by_id(id).await?;
    tracing::info!(id, "movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
