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
    models::{Director, NamePayload},
};

#[utoipa::path(
    get,
    path = "/directors/",
    tag = "directors",
    responses((status = 200, description = "Directors ordered by id", body = [Director]))
)]
pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Director>>> {
    let directors = state.directors.find_all().await.map_err(|e| e.into_internal())?;
    Ok(Json(directors.into_iter().map(Director::from).collect()))
}

#[utoipa::path(
    post,
    path = "/directors/",
    tag = "directors",
    request_body = NamePayload,
    responses((status = 201, description = "Created; `Location` names the new director"))
)]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NamePayload>,
) -> AppResult<impl IntoResponse> {
    let id = state.directors.insert(payload).await.map_err(|e| e.into_internal())?;
    tracing::info!(id, "director created");
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/directors/{id}"))]))
}

#[utoipa::path(
    get,
    path = "/directors/{id}",
    tag = "directors",
    params(("id" = i32, Path, description = "Director id")),
    responses(
        (status = 200, description = "The director", body = Director),
        (status = 404, description = "Lookup failed", body = String),
    )
)]
pub async fn read(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<Json<Director>> {
    let director = state.directors.find_by_id(id).await?;
    Ok(Json(director.into()))
}

#[utoipa::path(
    put,
    path = "/directors/{id}",
    tag = "directors",
    params(("id" = i32, Path, description = "Director id")),
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
    state.directors.find_by_id(id).await?;
    let Json(payload) = payload.map_err(body_error)?;
    state.directors.replace(id, payload).await?;
    tracing::info!(id, "director replaced");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/directors/{id}",
    tag = "directors",
    params(("id" = i32, Path, description = "Director id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Lookup failed", body = String),
    )
)]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> AppResult<StatusCode> {
    state.directors.delete_by_id(id).await?;
    tracing::info!(id, "director deleted");
    Ok(StatusCode::NO_CONTENT)
}
