use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::experience::application::ports::outgoing::{
        ExperienceProjectData, ExperienceProjectRepositoryError,
    },
    shared::api::{
        coerce::{LenientInt, LenientList},
        ApiResponse,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateExperienceProjectRequest {
    experience_id: Uuid,
    name: String,
    description: String,
    #[serde(default)]
    technologies: LenientList,
    #[serde(default)]
    team_size: LenientInt,
    #[serde(default)]
    responsibilities: LenientList,
    #[serde(default)]
    order: LenientInt,
}

#[put("/api/admin/experience-projects/{id}")]
pub async fn update_experience_project_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<UpdateExperienceProjectRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let req = payload.into_inner();

    let project = ExperienceProjectData {
        experience_id: req.experience_id,
        name: req.name,
        description: req.description,
        technologies: req.technologies.into_vec(),
        team_size: req.team_size.unwrap_or(1),
        responsibilities: req.responsibilities.into_vec(),
        order: req.order.unwrap_or(0),
    };

    match data.experience_projects.update(id, project).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(ExperienceProjectRepositoryError::NotFound) => ApiResponse::not_found(
            "EXPERIENCE_PROJECT_NOT_FOUND",
            "Experience project not found",
        ),

        Err(ExperienceProjectRepositoryError::DatabaseError(e)) => {
            error!("Failed to update experience project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
