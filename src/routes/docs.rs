use axum::{Json, response::Redirect};
use utoipa::OpenApi;

use super::{directors, genres, movies};
use crate::models::{Director, Genre, Movie, MoviePayload, NamePayload};

#[derive(OpenApi)]
#[openapi(
    info(title = "movieshelf", description = "Movies, directors and genres"),
    paths(
        movies::list,
        movies::create,
        movies::read,
        movies::update,
        movies::delete,
        directors::list,
        directors::create,
        directors::read,
        directors::update,
        directors::delete,
        genres::list,
        genres::create,
        genres::read,
        genres::update,
        genres::delete,
    ),
    components(schemas(Movie, MoviePayload, Director, Genre, NamePayload)),
    tags(
        (name = "movies", description = "Movie records, filterable by director or genre"),
        (name = "directors", description = "Directors"),
        (name = "genres", description = "Genres"),
    )
)]
pub struct ApiDoc;

pub async fn swagger() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn index() -> Redirect {
    Redirect::temporary("/swagger.json")
}
