mod directors;
mod docs;
mod genres;
mod movies;

use std::sync::Arc;

use axum::{
    Router,
    extract::{FromRequestParts, Path, rejection::JsonRejection},
    http::request::Parts,
    routing::get,
};

use crate::{AppState, error::AppError};

pub use docs::ApiDoc;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(docs::index))
        .route("/swagger.json", get(docs::swagger))
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/", get(movies::list).post(movies::create))
        .route("/movies/{id}", get(movies::read).put(movies::update).delete(movies::delete))
        .route("/directors", get(directors::list).post(directors::create))
        .route("/directors/", get(directors::list).post(directors::create))
        .route(
            "/directors/{id}",
            get(directors::read).put(directors::update).delete(directors::delete),
        )
        .route("/genres", get(genres::list).post(genres::create))
        .route("/genres/", get(genres::list).post(genres::create))
        .route("/genres/{id}", get(genres::read).put(genres::update).delete(genres::delete))
}

/// Numeric id from an item path. A non-numeric segment is a failed item lookup (404).
#[derive(Clone, Copy, Debug)]
pub struct ItemId(pub i32);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rej| AppError::Validation(rej.body_text()))?;
        Ok(Self(id))
    }
}

fn body_error(rej: JsonRejection) -> AppError {
    AppError::Validation(rej.body_text())
}
