use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Field set accepted from the admin forms for create and update.
#[derive(Debug, Clone)]
pub struct EducationData {
    pub degree: String,
    pub school: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub id: Uuid,
    pub degree: String,
    pub school: String,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EducationRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Education entry not found")]
    NotFound,
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<EducationRecord>, EducationRepositoryError>;

    async fn create(&self, data: EducationData)
        -> Result<EducationRecord, EducationRepositoryError>;

    /// Full replace by id; bumps `updated_at`.
    async fn update(
        &self,
        id: Uuid,
        data: EducationData,
    ) -> Result<EducationRecord, EducationRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), EducationRepositoryError>;
}
