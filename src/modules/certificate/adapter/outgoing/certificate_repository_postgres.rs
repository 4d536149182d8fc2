use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::certificate::application::ports::outgoing::{
    CertificateData, CertificateRecord, CertificateRepository, CertificateRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct CertificateRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificateRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CertificateRepositoryError {
    match e {
        DbErr::RecordNotUpdated => CertificateRepositoryError::NotFound,
        other => CertificateRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl CertificateRepository for CertificateRepositoryPostgres {
    async fn list(&self) -> Result<Vec<CertificateRecord>, CertificateRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Order)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }

    async fn create(
        &self,
        data: CertificateData,
    ) -> Result<CertificateRecord, CertificateRepositoryError> {
        let now = Utc::now();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            issuer: Set(data.issuer),
            date: Set(data.date),
            url: Set(data.url),
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
        data: CertificateData,
    ) -> Result<CertificateRecord, CertificateRepositoryError> {
        let active = ActiveModel {
            id: Set(id),
            name: Set(data.name),
            issuer: Set(data.issuer),
            date: Set(data.date),
            url: Set(data.url),
            order: Set(data.order),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), CertificateRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CertificateRepositoryError::NotFound);
        }

        Ok(())
    }
}
