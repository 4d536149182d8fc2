use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::experience::application::ports::outgoing::ExperienceData,
    shared::api::{
        coerce::{LenientInt, LenientList},
        ApiResponse,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateExperienceRequest {
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

#[post("/api/admin/experience")]
pub async fn create_experience_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateExperienceRequest>,
) -> impl Responder {
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

    match data.experiences.create(experience).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("Failed to create experience: {}", err);
            ApiResponse::internal_error()
        }
    }
}
