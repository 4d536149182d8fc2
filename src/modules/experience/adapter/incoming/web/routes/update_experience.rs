use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::experience::application::ports::outgoing::{
        ExperienceData, ExperienceRepositoryError,
    },
    shared::api::{
        coerce::{LenientInt, LenientList},
        ApiResponse,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateExperienceRequest {
    position: String,
    company: String,
    location: Option<String>,
    start_date: String,
    end_date: String,
    description: String,
    #[serde(default)]
    tech_stack: LenientList,
    #[serde(default)]
    order: LenientInt,
}

#[put("/api/admin/experience/{id}")]
pub async fn update_experience_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<UpdateExperienceRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let req = payload.into_inner();

    let experience = ExperienceData {
        position: req.position,
        company: req.company,
        location: req.location,
        start_date: req.start_date,
        end_date: req.end_date,
        description: req.description,
        tech_stack: req.tech_stack.into_vec(),
        order: req.order.unwrap_or(0),
    };

    match data.experiences.update(id, experience).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(ExperienceRepositoryError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }

        Err(ExperienceRepositoryError::DatabaseError(e)) => {
            error!("Failed to update experience {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
