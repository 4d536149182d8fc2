use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::about::application::ports::outgoing::AboutRepositoryError, shared::api::ApiResponse,
    AppState,
};

#[get("/api/admin/about")]
pub async fn get_abouts_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.abouts.list().await {
        Ok(entries) => ApiResponse::success(entries),

        Err(AboutRepositoryError::DatabaseError(e)) => {
            error!("Failed to list about entries: {}", e);
            ApiResponse::internal_error()
        }

        Err(AboutRepositoryError::NotFound) => ApiResponse::internal_error(),
    }
}
