use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::certificate::application::ports::outgoing::CertificateRepositoryError,
    shared::api::ApiResponse, AppState,
};

#[delete("/api/admin/certificates/{id}")]
pub async fn delete_certificate_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.certificates.delete(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(CertificateRepositoryError::NotFound) => {
            ApiResponse::not_found("CERTIFICATE_NOT_FOUND", "Certificate not found")
        }

        Err(CertificateRepositoryError::DatabaseError(e)) => {
            error!("Failed to delete certificate {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
