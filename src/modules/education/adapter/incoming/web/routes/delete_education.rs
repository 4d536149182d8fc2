use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::education::application::ports::outgoing::EducationRepositoryError,
    shared::api::ApiResponse, AppState,
};

#[delete("/api/admin/education/{id}")]
pub async fn delete_education_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.educations.delete(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(EducationRepositoryError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education entry not found")
        }

        Err(EducationRepositoryError::DatabaseError(e)) => {
            error!("Failed to delete education entry {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
