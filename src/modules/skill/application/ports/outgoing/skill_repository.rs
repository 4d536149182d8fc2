use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SkillData {
    pub name: String,
    pub category: String,
    /// 0..=100 by convention; the store does not enforce the bound.
    pub level: i32,
    pub icon: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub level: i32,
    pub icon: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Skills are append-only from the admin surface: the UI regroups them by
/// category client-side and offers no per-row edit.
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<SkillRecord>, SkillRepositoryError>;

    async fn create(&self, data: SkillData) -> Result<SkillRecord, SkillRepositoryError>;
}
