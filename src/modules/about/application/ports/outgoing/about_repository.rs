use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Field set accepted from the admin forms for create and update.
#[derive(Debug, Clone)]
pub struct AboutData {
    pub key: String,
    pub title: Option<String>,
    pub content: String,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutRecord {
    pub id: Uuid,
    pub key: String,
    pub title: Option<String>,
    pub content: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("About entry not found")]
    NotFound,
}

#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// All entries, ordered by the display `order` field ascending.
    async fn list(&self) -> Result<Vec<AboutRecord>, AboutRepositoryError>;

    async fn create(&self, data: AboutData) -> Result<AboutRecord, AboutRepositoryError>;

    /// Full replace by id; bumps `updated_at`.
    async fn update(&self, id: Uuid, data: AboutData)
        -> Result<AboutRecord, AboutRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), AboutRepositoryError>;
}
