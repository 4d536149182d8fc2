use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Field set accepted from the admin forms for create and update.
#[derive(Debug, Clone)]
pub struct ProjectData {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: Option<String>,
    pub tech_stack: Vec<String>,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: Option<String>,
    pub tech_stack: Vec<String>,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Project not found")]
    NotFound,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectRepositoryError>;

    async fn create(&self, data: ProjectData) -> Result<ProjectRecord, ProjectRepositoryError>;

    /// Full replace by id; bumps `updated_at`.
    async fn update(
        &self,
        id: Uuid,
        data: ProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
