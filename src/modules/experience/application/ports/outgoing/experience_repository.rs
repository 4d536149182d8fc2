use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::ExperienceProjectRecord;

/// Field set accepted from the admin forms for create and update.
#[derive(Debug, Clone)]
pub struct ExperienceData {
    pub position: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub order: i32,
}

/// An experience row with its project highlights embedded, both in
/// display order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub position: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub order: i32,
    pub projects: Vec<ExperienceProjectRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Experience not found")]
    NotFound,
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// All experiences ordered by `order`, each embedding its projects
    /// ordered the same way.
    async fn list(&self) -> Result<Vec<ExperienceRecord>, ExperienceRepositoryError>;

    /// Create returns the record with an empty `projects` list; children
    /// are attached through the experience-projects endpoints.
    async fn create(
        &self,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    /// Full replace by id; bumps `updated_at`. Children are untouched.
    async fn update(
        &self,
        id: Uuid,
        data: ExperienceData,
    ) -> Result<ExperienceRecord, ExperienceRepositoryError>;

    /// Children go with the row via the store's ON DELETE CASCADE.
    async fn delete(&self, id: Uuid) -> Result<(), ExperienceRepositoryError>;
}
