use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::education::application::ports::outgoing::{
    EducationData, EducationRecord, EducationRepository, EducationRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> EducationRepositoryError {
    match e {
        DbErr::RecordNotUpdated => EducationRepositoryError::NotFound,
        other => EducationRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl EducationRepository for EducationRepositoryPostgres {
    async fn list(&self) -> Result<Vec<EducationRecord>, EducationRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Order)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }

    async fn create(
        &self,
        data: EducationData,
    ) -> Result<EducationRecord, EducationRepositoryError> {
        let now = Utc::now();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            degree: Set(data.degree),
            school: Set(data.school),
            location: Set(data.location),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            description: Set(data.description),
            order: Set(data.order),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        id: Uuid,
        data: EducationData,
    ) -> Result<EducationRecord, EducationRepositoryError> {
        let active = ActiveModel {
            id: Set(id),
            degree: Set(data.degree),
            school: Set(data.school),
            location: Set(data.location),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            description: Set(data.description),
            order: Set(data.order),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), EducationRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EducationRepositoryError::NotFound);
        }

        Ok(())
    }
}
