use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

/// Field set accepted from the admin forms for create and update.
#[derive(Debug, Clone)]
pub struct ExperienceProjectData {
    pub experience_id: Uuid,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub team_size: i32,
    pub responsibilities: Vec<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceProjectRecord {
    pub id: Uuid,
    pub experience_id: Uuid,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub team_size: i32,
    pub responsibilities: Vec<String>,
    pub order: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceProjectRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Experience project not found")]
    NotFound,
}

/// No list operation; rows surface embedded in the experience list.
#[async_trait]
pub trait ExperienceProjectRepository: Send + Sync {
    async fn create(
        &self,
        data: ExperienceProjectData,
    ) -> Result<ExperienceProjectRecord, ExperienceProjectRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: ExperienceProjectData,
    ) -> Result<ExperienceProjectRecord, ExperienceProjectRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ExperienceProjectRepositoryError>;
}
