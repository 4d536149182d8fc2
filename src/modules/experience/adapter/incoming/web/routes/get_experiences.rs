use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::experience::application::ports::outgoing::ExperienceRepositoryError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/admin/experience")]
pub async fn get_experiences_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.experiences.list().await {
        Ok(experiences) => ApiResponse::success(experiences),

        Err(ExperienceRepositoryError::DatabaseError(e)) => {
            error!("Failed to list experiences: {}", e);
            ApiResponse::internal_error()
        }

        Err(ExperienceRepositoryError::NotFound) => ApiResponse::internal_error(),
    }
}
