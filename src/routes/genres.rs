use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::{ItemId, body_error};
use crate::{
    AppState,
    error::AppResult,
    models::{Genre, NamePayload},
};

#[utoipa::path(
    get,
    path = "/genres/",
    tag = "genres",
    responses((status = 200, description = "Genres ordered by id", body = [Genre]))
)]
pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Genre>>> {
    let genres = state.genres.find_all().await.map_err(|e| e.into_internal())?;
    Ok(Json(genres.into_iter().map(Genre::from).collect()))
}

#[utoipa::path(
    post,
    path = "/genres/",
    tag = "genres",
    request_body = NamePayload,
    responses((status = 201, description = "Created; `Location` names the new genre"))
)]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NamePayload>,
) -> AppResult<impl IntoResponse> {
    let id = state.genres.insert(payload).await.map_err(|e| e.into_internal())?;
    tracing::info!(id, "genre created");
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/genres/{id}"))]))
}

#[utoipa::path(
    get,
    path = "/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre id")),
    responses(
        (status = 200, description = "The genre", body = Genre),
        (status = 404, description = "Lookup failed", body = String),
    )
)]
pub async fn read(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<Json<Genre>> {
    let genre = state.genres.find_by_id(id).await?;
    Ok(Json(genre.into()))
}

#[utoipa::path(
    put,
    path = "/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre id")),
    request_body = NamePayload,
    responses(
        (status = 204, description = "Name replaced; an omitted name becomes null"),
        (status = 404, description = "Lookup or body failed", body = String),
    )
)]
pub async fn update(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    payload: Result<Json<NamePayload>, JsonRejection>,
) -> AppResult<StatusCode> {
    state.genres.find_by_id(id).await?;
    let Json(payload) = payload.map_err(body_error)?;
    state.genres.replace(id, payload).await?;
    tracing::info!(id, "genre replaced");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Lookup failed", body = String),
    )
)]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<StatusCode> {
    state.genres.delete_by_id(id).await?;
    tracing::info!(id, "genre deleted");
    Ok(StatusCode::NO_CONTENT)
}
