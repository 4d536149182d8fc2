use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::contact::application::ports::outgoing::ContactRepositoryError,
    shared::api::ApiResponse, AppState,
};

#[get("/api/admin/contact")]
pub async fn get_contacts_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contacts.list().await {
        Ok(messages) => ApiResponse::success(messages),

        Err(ContactRepositoryError::DatabaseError(e)) => {
            error!("Failed to list contact messages: {}", e);
            ApiResponse::internal_error()
        }

        Err(ContactRepositoryError::NotFound) => ApiResponse::internal_error(),
    }
}
