use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::education::application::ports::outgoing::{EducationData, EducationRepositoryError},
    shared::api::{coerce::LenientInt, ApiResponse},
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateEducationRequest {
    degree: String,
    school: String,
    location: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    description: Option<String>,
    #[serde(default)]
    order: LenientInt,
}

#[put("/api/admin/education/{id}")]
pub async fn update_education_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<UpdateEducationRequest>,
) -> impl Responder {
    let id = path.into_inner();
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

    match data.educations.update(id, entry).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(EducationRepositoryError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education entry not found")
        }

        Err(EducationRepositoryError::DatabaseError(e)) => {
            error!("Failed to update education entry {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
