use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::education::application::ports::outgoing::EducationData,
    shared::api::{coerce::LenientInt, ApiResponse},
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateEducationRequest {
    degree: String,
    school: String,
    location: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    description: Option<String>,
    #[serde(default)]
    order: LenientInt,
}

#[post("/api/admin/education")]
pub async fn create_education_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateEducationRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let entry = EducationData {
        degree: req.degree,
        school: req.school,
        location: req.location,
        start_date: req.start_date,
        end_date: req.end_date,
        description: req.description,
        order: req.order.unwrap_or(0),
    };

    match data.educations.create(entry).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("Failed to create education entry: {}", err);
            ApiResponse::internal_error()
        }
    }
}
