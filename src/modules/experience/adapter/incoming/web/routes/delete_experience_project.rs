use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::experience::application::ports::outgoing::ExperienceProjectRepositoryError,
    shared::api::ApiResponse, AppState,
};

#[delete("/api/admin/experience-projects/{id}")]
pub async fn delete_experience_project_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.experience_projects.delete(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(ExperienceProjectRepositoryError::NotFound) => ApiResponse::not_found(
            "EXPERIENCE_PROJECT_NOT_FOUND",
            "Experience project not found",
        ),

        Err(ExperienceProjectRepositoryError::DatabaseError(e)) => {
            error!("Failed to delete experience project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
