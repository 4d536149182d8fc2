use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::about::application::ports::outgoing::{
    AboutData, AboutRecord, AboutRepository, AboutRepositoryError,
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct AboutRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> AboutRepositoryError {
    match e {
        DbErr::RecordNotUpdated => AboutRepositoryError::NotFound,
        other => AboutRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl AboutRepository for AboutRepositoryPostgres {
    async fn list(&self) -> Result<Vec<AboutRecord>, AboutRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Order)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }

    async fn create(&self, data: AboutData) -> Result<AboutRecord, AboutRepositoryError> {
        let now = Utc::now();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            key: Set(data.key),
            title: Set(data.title),
            content: Set(data.content),
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
        data: AboutData,
    ) -> Result<AboutRecord, AboutRepositoryError> {
        let active = ActiveModel {
            id: Set(id),
            key: Set(data.key),
            title: Set(data.title),
            content: Set(data.content),
            order: Set(data.order),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_record())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AboutRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(AboutRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::about::adapter::outgoing::sea_orm_entity::Model;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    fn about_model(key: &str, order: i32) -> Model {
        let now = Utc::now().fixed_offset();

        Model {
            id: Uuid::new_v4(),
            key: key.to_string(),
            title: Some(format!("{key} title")),
            content: "content".to_string(),
            order,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_returns_rows_in_display_order() {
        let rows = vec![about_model("intro", 0), about_model("bio", 1)];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows.clone()])
            .into_connection();

        let repo = AboutRepositoryPostgres::new(Arc::new(db));

        let records = repo.list().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].key, "intro");
        assert_eq!(records[1].key, "bio");
        assert!(records[0].order <= records[1].order);
    }

    #[tokio::test]
    async fn create_persists_and_returns_the_record() {
        let inserted = about_model("intro", 3);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![inserted.clone()]])
            .into_connection();

        let repo = AboutRepositoryPostgres::new(Arc::new(db));

        let record = repo
            .create(AboutData {
                key: "intro".to_string(),
                title: Some("intro title".to_string()),
                content: "content".to_string(),
                order: 3,
            })
            .await
            .unwrap();

        assert_eq!(record.id, inserted.id);
        assert_eq!(record.key, "intro");
        assert_eq!(record.order, 3);
    }

    #[tokio::test]
    async fn create_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "insert failed".into(),
            ))])
            .into_connection();

        let repo = AboutRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create(AboutData {
                key: "intro".to_string(),
                title: None,
                content: "content".to_string(),
                order: 0,
            })
            .await;

        assert!(matches!(result, Err(AboutRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::RecordNotUpdated])
            .into_connection();

        let repo = AboutRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .update(
                Uuid::new_v4(),
                AboutData {
                    key: "intro".to_string(),
                    title: None,
                    content: "content".to_string(),
                    order: 0,
                },
            )
            .await;

        assert!(matches!(result, Err(AboutRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_success_and_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = AboutRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
        assert!(matches!(
            repo.delete(Uuid::new_v4()).await,
            Err(AboutRepositoryError::NotFound)
        ));
    }
}
