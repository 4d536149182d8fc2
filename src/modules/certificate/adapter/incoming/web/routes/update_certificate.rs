use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::certificate::application::ports::outgoing::{
        CertificateData, CertificateRepositoryError,
    },
    shared::api::{coerce::LenientInt, ApiResponse},
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCertificateRequest {
    name: String,
    issuer: String,
    date: String,
    url: Option<String>,
    #[serde(default)]
    order: LenientInt,
}

#[put("/api/admin/certificates/{id}")]
pub async fn update_certificate_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<UpdateCertificateRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let req = payload.into_inner();

    let certificate = CertificateData {
        name: req.name,
        issuer: req.issuer,
        date: req.date,
        url: req.url,
        order: req.order.unwrap_or(0),
    };

    match data.certificates.update(id, certificate).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(CertificateRepositoryError::NotFound) => {
            ApiResponse::not_found("CERTIFICATE_NOT_FOUND", "Certificate not found")
        }

        Err(CertificateRepositoryError::DatabaseError(e)) => {
            error!("Failed to update certificate {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
