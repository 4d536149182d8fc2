use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::skill::application::ports::outgoing::SkillRepositoryError, shared::api::ApiResponse,
    AppState,
};

#[get("/api/admin/skills")]
pub async fn get_skills_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skills.list().await {
        Ok(skills) => ApiResponse::success(skills),

        Err(SkillRepositoryError::DatabaseError(e)) => {
            error!("Failed to list skills: {}", e);
            ApiResponse::internal_error()
        }
    }
}
