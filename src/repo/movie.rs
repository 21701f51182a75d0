use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{MovieFilter, MoviePayload},
};

const ENTITY: &str = "movie";

#[derive(Clone)]
pub struct MovieRepo {
    db: DatabaseConnection,
}

impl MovieRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?)
    }

    pub async fn find_by_director(&self, director_id: i32) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find()
            .filter(movie::Column::DirectorId.eq(director_id))
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_genre(&self, genre_id: i32) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find()
            .filter(movie::Column::GenreId.eq(genre_id))
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn find_filtered(&self, filter: MovieFilter) -> AppResult<Vec<movie::Model>> {
        match filter {
            MovieFilter::All => self.find_all().await,
            MovieFilter::Director(id) => self.find_by_director(id).await,
            MovieFilter::Genre(id) => self.find_by_genre(id).await,
        }
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound { entity: ENTITY, id })
    }

    /// Returns the id assigned to the new row.
    pub async fn insert(&self, payload: MoviePayload) -> AppResult<i32> {
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(payload.title),
            description: Set(payload.description),
            trailer: Set(payload.trailer),
            year: Set(payload.year),
            rating: Set(payload.rating),
            genre_id: Set(payload.genre_id),
            director_id: Set(payload.director_id),
        };

        let res = movie::Entity::insert(model).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    /// Overwrites every column; keys missing from the payload become null.
    pub async fn replace(&self, id: i32, payload: MoviePayload) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let mut model = movie::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound { entity: ENTITY, id })?
            .into_active_model();

        model.title = Set(payload.title);
        model.description = Set(payload.description);
        model.trailer = Set(payload.trailer);
        model.year = Set(payload.year);
        model.rating = Set(payload.rating);
        model.genre_id = Set(payload.genre_id);
        model.director_id = Set(payload.director_id);
        model.update(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let movie = self.find_by_id(id).await?;
        movie.delete(&self.db).await?;
        Ok(())
    }
}
