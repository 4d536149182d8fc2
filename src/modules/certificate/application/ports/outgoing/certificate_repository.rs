use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Field set accepted from the admin forms for create and update.
/// `date` is free text ("June 2023", "2021"), never parsed.
#[derive(Debug, Clone)]
pub struct CertificateData {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CertificateRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Certificate not found")]
    NotFound,
}

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<CertificateRecord>, CertificateRepositoryError>;

    async fn create(
        &self,
        data: CertificateData,
    ) -> Result<CertificateRecord, CertificateRepositoryError>;

    /// Full replace by id; bumps `updated_at`.
    async fn update(
        &self,
        id: Uuid,
        data: CertificateData,
    ) -> Result<CertificateRecord, CertificateRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), CertificateRepositoryError>;
}
