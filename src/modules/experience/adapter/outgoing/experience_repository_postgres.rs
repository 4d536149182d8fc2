use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::application::ports::outgoing::{
    ExperienceData, ExperienceProjectRecord, ExperienceRecord, ExperienceRepository,
    ExperienceRepositoryError,
};
use crate::shared::db::StringList;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use super::sea_orm_project_entity;

#[derive(Debug, Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    match e {
        DbErr::RecordNotUpdated => ExperienceRepositoryError::NotFound,
        other => ExperienceRepositoryError::DatabaseError(other.to_string()),
    }
}

fn to_record(model: Model, projects: Vec<ExperienceProjectRecord>) -> ExperienceRecord {
    ExperienceRecord {
        id: model.id,
        position: model.position,
        company: model.company,
        location: model.location,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
        tech_stack: model.tech_stack.into_vec(),
        order: model.order,
        projects,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError> {
        let experiences = Entity::find()
            .order_by_asc(Column::Order)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        // One ordered sweep over the children, grouped in memory. Row counts
        // here are a handful of career entries, not worth a join.
        let children = sea_orm_project_entity::Entity::find()
            .order_by_asc(sea_orm_project_entity::Column::Order)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let records = experiences
            .into_iter()
            .map(|exp| {
                let projects = children
                    .iter()
                    .filter(|c| c.experience_id == exp.id)
                    .map(|c| c.to_record())
                    .collect();
                to_record(exp, projects)
            })
            .collect();

        Ok(records)
    }

    async fn create(
        &self,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let now = Utc::now();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            position: Set(data.position),
            company: Set(data.company),
            location: Set(data.location),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            description: Set(data.description),
            tech_stack: Set(StringList(data.tech_stack)),
            order: Set(data.order),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(to_record(inserted, Vec::new()))
    }

    async fn update(
        &self,
        id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError> {
        let active = ActiveModel {
            id: Set(id),
            position: Set(data.position),
            company: Set(data.company),
            location: Set(data.location),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            description: Set(data.description),
            tech_stack: Set(StringList(data.tech_stack)),
            order: Set(data.order),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        let projects = sea_orm_project_entity::Entity::find()
            .order_by_asc(sea_orm_project_entity::Column::Order)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .filter(|c| c.experience_id == id)
            .map(|c| c.to_record())
            .collect();

        Ok(to_record(updated, projects))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }

        Ok(())
    }
}
