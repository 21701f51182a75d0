use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("{0}")]
    Validation(String),

    #[error("invalid {name} filter: {value:?} is not an integer")]
    InvalidFilter { name: &'static str, value: String },

    /// The query string itself could not be decoded.
    #[error("{0}")]
    BadQuery(String),

    /// A storage failure while handling a single item.
    #[error(transparent)]
    Storage(#[from] sea_orm::DbErr),

    /// A storage failure on a collection endpoint.
    #[error(transparent)]
    Internal(sea_orm::DbErr),
}

impl AppError {
    /// Collection endpoints do not hide storage failures behind 404.
    pub fn into_internal(self) -> Self {
        match self {
            AppError::Storage(err) => AppError::Internal(err),
            other => other,
        }
    }

    /// Item lookups report every failure kind as 404 to keep the public contract stable.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } | AppError::Validation(_) | AppError::Storage(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::InvalidFilter { .. } | AppError::BadQuery(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound { entity, id } => tracing::debug!(entity, id, "not found"),
            AppError::Validation(msg) => tracing::info!(error = %msg, "rejected request body"),
            AppError::InvalidFilter { name, value } => {
                tracing::info!(name, value = %value, "rejected filter")
            }
            AppError::BadQuery(msg) => tracing::info!(error = %msg, "rejected query string"),
            AppError::Storage(err) => tracing::warn!(error = %err, "item storage error"),
            AppError::Internal(err) => tracing::error!(error = %err, "storage error"),
        }

        (self.status(), Json(self.to_string())).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_failures_collapse_to_not_found() {
        let missing = AppError::NotFound { entity: "movie", id: 9 };
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "movie 9 not found");

        let bad_body = AppError::Validation("expected value".into());
        assert_eq!(bad_body.status(), StatusCode::NOT_FOUND);

        let storage = AppError::from(sea_orm::DbErr::Custom("disk I/O error".into()));
        assert_eq!(storage.status(), StatusCode::NOT_FOUND);
        assert!(storage.to_string().contains("disk I/O error"));
    }

    #[test]
    fn filter_and_collection_errors_keep_their_status() {
        let filter = AppError::InvalidFilter { name: "genre_id", value: "abc".into() };
        assert_eq!(filter.status(), StatusCode::BAD_REQUEST);
        assert!(filter.to_string().contains("genre_id"));

        let query = AppError::BadQuery("duplicate field `director_id`".into());
        assert_eq!(query.status(), StatusCode::BAD_REQUEST);

        let internal = AppError::from(sea_orm::DbErr::Custom("locked".into())).into_internal();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let missing = AppError::NotFound { entity: "movie", id: 1 }.into_internal();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn response_carries_error_text() {
        let resp = AppError::NotFound { entity: "genre", id: 3 }.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get(axum::http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
