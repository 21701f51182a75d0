use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder,
    Set, TransactionTrait,
};

use crate::{
    entities::director,
    error::{AppError, AppResult},
    models::NamePayload,
};

const ENTITY: &str = "director";

#[derive(Clone)]
pub struct DirectorRepo {
    db: DatabaseConnection,
}

impl DirectorRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> AppResult<Vec<director::Model>> {
        Ok(director::Entity::find().order_by_asc(director::Column::Id).all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<director::Model> {
        director::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound { entity: ENTITY, id })
    }

    pub async fn insert(&self, payload: NamePayload) -> AppResult<i32> {
        let model = director::ActiveModel { id: Default::default(), name: Set(payload.name) };
        let res = director::Entity::insert(model).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    pub async fn replace(&self, id: i32, payload: NamePayload) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let mut model = director::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound { entity: ENTITY, id })?
            .into_active_model();
        model.name = Set(payload.name);
        model.update(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Movies pointing at this director keep their director_id.
    pub async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        let director = self.find_by_id(id).await?;
        director.delete(&self.db).await?;
        Ok(())
    }
}
