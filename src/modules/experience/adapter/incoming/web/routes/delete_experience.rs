use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::experience::application::ports::outgoing::ExperienceRepositoryError,
    shared::api::ApiResponse, AppState,
};

#[delete("/api/admin/experience/{id}")]
pub async fn delete_experience_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.experiences.delete(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(ExperienceRepositoryError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }

        Err(ExperienceRepositoryError::DatabaseError(e)) => {
            error!("Failed to delete experience {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
