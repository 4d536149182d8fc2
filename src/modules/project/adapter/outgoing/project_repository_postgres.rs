use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::{
    ProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::db::StringList;

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    match e {
        DbErr::RecordNotUpdated => ProjectRepositoryError::NotFound,
        other => ProjectRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Order)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }

    async fn create(&self, data: ProjectData) -> Result<ProjectRecord, ProjectRepositoryError> {
        let now = Utc::now();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            description: Set(data.description),
            content: Set(data.content),
            tech_stack: Set(StringList(data.tech_stack)),
            image_url: Set(data.image_url),
            images: Set(StringList(data.images)),
            demo_url: Set(data.demo_url),
            github_url: Set(data.github_url),
            featured: Set(data.featured),
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
        data: ProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let active = ActiveModel {
            id: Set(id),
            title: Set(data.title),
            slug: Set(data.slug),
            description: Set(data.description),
            content: Set(data.content),
            tech_stack: Set(StringList(data.tech_stack)),
            image_url: Set(data.image_url),
            images: Set(StringList(data.images)),
            demo_url: Set(data.demo_url),
            github_url: Set(data.github_url),
            featured: Set(data.featured),
            order: Set(data.order),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}
