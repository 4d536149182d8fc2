use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::application::ports::outgoing::{
    ContactData, ContactRecord, ContactRepository, ContactRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    match e {
        DbErr::RecordNotUpdated => ContactRepositoryError::NotFound,
        other => ContactRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ContactRecord>, ContactRepositoryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }

    async fn create(&self, data: ContactData) -> Result<ContactRecord, ContactRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            subject: Set(data.subject),
            message: Set(data.message),
            read: Set(false),
            created_at: Set(Utc::now().into()),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_record())
    }

    async fn set_read(
        &self,
        id: Uuid,
        read: bool,
    ) -> Result<ContactRecord, ContactRepositoryError> {
        let active = ActiveModel {
            id: Set(id),
            read: Set(read),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }

        Ok(())
    }
}
