use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::contact::application::ports::outgoing::ContactRepositoryError,
    shared::api::ApiResponse, AppState,
};

#[delete("/api/admin/contact/{id}")]
pub async fn delete_contact_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.contacts.delete(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(ContactRepositoryError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact message not found")
        }

        Err(ContactRepositoryError::DatabaseError(e)) => {
            error!("Failed to delete contact message {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
