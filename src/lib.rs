pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod repo;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::repo::{DirectorRepo, GenreRepo, MovieRepo};

#[derive(Clone)]
pub struct AppState {
    pub movies: MovieRepo,
    pub directors: DirectorRepo,
    pub genres: GenreRepo,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            movies: MovieRepo::new(db.clone()),
            directors: DirectorRepo::new(db.clone()),
            genres: GenreRepo::new(db),
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    routes::router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any)),
    )
}
