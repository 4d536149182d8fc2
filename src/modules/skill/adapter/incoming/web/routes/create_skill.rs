use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::skill::application::ports::outgoing::SkillData,
    shared::api::{coerce::LenientInt, ApiResponse},
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSkillRequest {
    name: String,
    category: String,
    #[serde(default)]
    level: LenientInt,
    icon: Option<String>,
    #[serde(default)]
    order: LenientInt,
}

#[post("/api/admin/skills")]
pub async fn create_skill_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateSkillRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let skill = SkillData {
        name: req.name,
        category: req.category,
        level: req.level.unwrap_or(80),
        icon: req.icon,
        order: req.order.unwrap_or(0),
    };

    match data.skills.create(skill).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("Failed to create skill: {}", err);
            ApiResponse::internal_error()
        }
    }
}
