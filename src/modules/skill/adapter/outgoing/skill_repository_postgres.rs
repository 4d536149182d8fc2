use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::application::ports::outgoing::{
    SkillData, SkillRecord, SkillRepository, SkillRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn list(&self) -> Result<Vec<SkillRecord>, SkillRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Order)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }

    async fn create(&self, data: SkillData) -> Result<SkillRecord, SkillRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            category: Set(data.category),
            level: Set(data.level),
            icon: Set(data.icon),
            order: Set(data.order),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_record())
    }
}
