use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::project::application::ports::outgoing::ProjectRepositoryError,
    shared::api::ApiResponse, AppState,
};

#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.projects.delete(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(ProjectRepositoryError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(ProjectRepositoryError::DatabaseError(e)) => {
            error!("Failed to delete project {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
