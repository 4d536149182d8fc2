use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::certificate::application::ports::outgoing::CertificateData,
    shared::api::{coerce::LenientInt, ApiResponse},
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCertificateRequest {
    name: String,
    issuer: String,
    date: String,
    url: Option<String>,
    #[serde(default)]
    order: LenientInt,
}

#[post("/api/admin/certificates")]
pub async fn create_certificate_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateCertificateRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let certificate = CertificateData {
        name: req.name,
        issuer: req.issuer,
        date: req.date,
        url: req.url,
        order: req.order.unwrap_or(0),
    };

    match data.certificates.create(certificate).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("Failed to create certificate: {}", err);
            ApiResponse::internal_error()
        }
    }
}
