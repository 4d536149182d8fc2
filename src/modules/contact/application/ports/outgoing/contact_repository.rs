use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A submitted contact-form message. Immutable after insert except the
/// read flag.
#[derive(Debug, Clone)]
pub struct ContactData {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Contact message not found")]
    NotFound,
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<ContactRecord>, ContactRepositoryError>;

    /// Inserts with `read = false` and a server-assigned creation time.
    async fn create(&self, data: ContactData) -> Result<ContactRecord, ContactRepositoryError>;

    /// Flips the read flag; everything else stays as submitted.
    async fn set_read(&self, id: Uuid, read: bool)
        -> Result<ContactRecord, ContactRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError>;
}
