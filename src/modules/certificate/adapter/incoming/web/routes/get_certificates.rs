use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::certificate::application::ports::outgoing::CertificateRepositoryError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/admin/certificates")]
pub async fn get_certificates_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.certificates.list().await {
        Ok(certificates) => ApiResponse::success(certificates),

        Err(CertificateRepositoryError::DatabaseError(e)) => {
            error!("Failed to list certificates: {}", e);
            ApiResponse::internal_error()
        }

        Err(CertificateRepositoryError::NotFound) => ApiResponse::internal_error(),
    }
}
