use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::application::ports::outgoing::{
    ExperienceProjectData, ExperienceProjectRecord, ExperienceProjectRepository,
    ExperienceProjectRepositoryError,
};
use crate::shared::db::StringList;

use super::sea_orm_project_entity::{ActiveModel, Entity};

#[derive(Debug, Clone)]
pub struct ExperienceProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ExperienceProjectRepositoryError {
    match e {
        DbErr::RecordNotUpdated => ExperienceProjectRepositoryError::NotFound,
        other => ExperienceProjectRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl ExperienceProjectRepository for ExperienceProjectRepositoryPostgres {
    async fn create(
        &self,
        data: ExperienceProjectData,
    ) -> Result<ExperienceProjectRecord, ExperienceProjectRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            experience_id: Set(data.experience_id),
            name: Set(data.name),
            description: Set(data.description),
            technologies: Set(StringList(data.technologies)),
            team_size: Set(data.team_size),
            responsibilities: Set(StringList(data.responsibilities)),
            order: Set(data.order),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        id: Uuid,
        data: ExperienceProjectData,
    ) -> Result<ExperienceProjectRecord, ExperienceProjectRepositoryError> {
        let active = ActiveModel {
            id: Set(id),
            experience_id: Set(data.experience_id),
            name: Set(data.name),
            description: Set(data.description),
            technologies: Set(StringList(data.technologies)),
            team_size: Set(data.team_size),
            responsibilities: Set(StringList(data.responsibilities)),
            order: Set(data.order),
        };

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}
