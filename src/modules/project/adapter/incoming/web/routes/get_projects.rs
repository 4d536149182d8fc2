use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::project::application::ports::outgoing::ProjectRepositoryError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/admin/projects")]
pub async fn get_projects_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.projects.list().await {
        Ok(projects) => ApiResponse::success(projects),

        Err(ProjectRepositoryError::DatabaseError(e)) => {
            error!("Failed to list projects: {}", e);
            ApiResponse::internal_error()
        }

        Err(ProjectRepositoryError::NotFound) => ApiResponse::internal_error(),
    }
}
