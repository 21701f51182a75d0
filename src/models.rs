use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    entities::{director, genre, movie},
    error::AppError,
};

#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Movie {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl From<movie::Model> for Movie {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            trailer: m.trailer,
            year: m.year,
            rating: m.rating,
            genre_id: m.genre_id,
            director_id: m.director_id,
        }
    }
}

/// Request body for creating or replacing a movie.
///
/// Every key is optional; a missing key means null, both on create and on
/// replace. `id` and any other unknown key are ignored.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct MoviePayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Director {
    pub id: i32,
    pub name: Option<String>,
}

impl From<director::Model> for Director {
    fn from(m: director::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Genre {
    pub id: i32,
    pub name: Option<String>,
}

impl From<genre::Model> for Genre {
    fn from(m: genre::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

/// Request body for directors and genres, which only carry a name.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct NamePayload {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MovieListQuery {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MovieFilter {
    All,
    Director(i32),
    Genre(i32),
}

impl MovieListQuery {
    /// `director_id` wins when both filters are given.
    pub fn filter(&self) -> Result<MovieFilter, AppError> {
        if let Some(raw) = &self.director_id {
            return parse_id("director_id", raw).map(MovieFilter::Director);
        }
        if let Some(raw) = &self.genre_id {
            return parse_id("genre_id", raw).map(MovieFilter::Genre);
        }
        Ok(MovieFilter::All)
    }
}

fn parse_id(name: &'static str, raw: &str) -> Result<i32, AppError> {
    raw.trim().parse().map_err(|_| AppError::InvalidFilter { name, value: raw.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(director_id: Option<&str>, genre_id: Option<&str>) -> MovieListQuery {
        MovieListQuery {
            director_id: director_id.map(str::to_string),
            genre_id: genre_id.map(str::to_string),
        }
    }

    #[test]
    fn no_params_lists_everything() {
        assert_eq!(query(None, None).filter().unwrap(), MovieFilter::All);
    }

    #[test]
    fn director_takes_precedence_over_genre() {
        assert_eq!(query(Some("3"), Some("7")).filter().unwrap(), MovieFilter::Director(3));
        assert_eq!(query(None, Some("7")).filter().unwrap(), MovieFilter::Genre(7));
    }

    #[test]
    fn non_numeric_filter_is_rejected() {
        let err = query(Some("abc"), None).filter().unwrap_err();
        assert!(matches!(err, AppError::InvalidFilter { name: "director_id", .. }));

        // Precedence applies before parsing, so a bad genre_id is never looked at.
        assert_eq!(query(Some("1"), Some("x")).filter().unwrap(), MovieFilter::Director(1));
    }

    #[test]
    fn payload_missing_keys_are_null_and_unknown_keys_ignored() {
        let payload: MoviePayload =
            serde_json::from_str(r#"{"id": 42, "title": "X", "year": 2000, "extra": true}"#)
                .unwrap();
        assert_eq!(payload.title.as_deref(), Some("X"));
        assert_eq!(payload.year, Some(2000));
        assert_eq!(payload.description, None);
        assert_eq!(payload.rating, None);
        assert_eq!(payload.genre_id, None);
    }

    #[test]
    fn movie_serializes_nulls() {
        let movie = Movie::from(movie::Model {
            id: 1,
            title: Some("X".into()),
            description: None,
            trailer: None,
            year: Some(2000),
            rating: Some(7.5),
            genre_id: None,
            director_id: Some(2),
        });
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "X",
                "description": null,
                "trailer": null,
                "year": 2000,
                "rating": 7.5,
                "genre_id": null,
                "director_id": 2,
            })
        );
    }
}
