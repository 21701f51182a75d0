use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder,
    Set, TransactionTrait,
};

use crate::{
    entities::genre,
    error::{AppError, AppResult},
    models::NamePayload,
};

const ENTITY: &str = "genre";

#[derive(Clone)]
pub struct GenreRepo {
    db: DatabaseConnection,
}

impl GenreRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> AppResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().order_by_asc(genre::Column::Id).all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<genre::Model> {
        genre::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound { entity: ENTITY, id })
    }

    pub async fn insert(&self, payload: NamePayload) -> AppResult<i32> {
        let model = genre::ActiveModel { id: Default::default(), name: Set(payload.name) };
        let res = genre::Entity::insert(model).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    pub async fn replace(&self, id: i32, payload: NamePayload) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let mut model = genre::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound { entity: ENTITY, id })?
            .into_active_model();
        model.name = Set(payload.name);
        model.update(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Movies in this genre keep their genre_id.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let genre = self.find_by_id(id).await?;
        genre.delete(&self.db).await?;
        Ok(())
    }
}
