use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::about::application::ports::outgoing::{AboutData, AboutRepositoryError},
    shared::api::{coerce::LenientInt, ApiResponse},
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAboutRequest {
    key: String,
    title: Option<String>,
    content: String,
    #[serde(default)]
    order: LenientInt,
}

#[post("/api/admin/about")]
pub async fn create_about_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<CreateAboutRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let entry = AboutData {
        key: req.key,
        title: req.title,
        content: req.content,
        order: req.order.unwrap_or(0),
    };

    match data.abouts.create(entry).await {
        Ok(created) => ApiResponse::created(created),

        Err(err) => {
            error!("Failed to create about entry: {}", err);
            ApiResponse::internal_error()
        }
    }
}
