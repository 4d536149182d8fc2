use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::adapter::incoming::web::extractors::session::AdminSession,
    modules::contact::application::ports::outgoing::ContactRepositoryError,
    shared::api::{coerce::Truthy, ApiResponse},
    AppState,
};

/// Only the read flag is mutable; the message itself stays as submitted.
#[derive(Debug, Deserialize)]
struct UpdateContactRequest {
    #[serde(default)]
    read: Truthy,
}

#[put("/api/admin/contact/{id}")]
pub async fn update_contact_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<UpdateContactRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let read = payload.into_inner().read.as_bool();

    match data.contacts.set_read(id, read).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(ContactRepositoryError::NotFound) => {
            ApiResponse::not_found("CONTACT_NOT_FOUND", "Contact message not found")
        }

        Err(ContactRepositoryError::DatabaseError(e)) => {
            error!("Failed to update contact message {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
