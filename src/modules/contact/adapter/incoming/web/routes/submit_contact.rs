use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::{
    modules::contact::application::services::submit_contact::ContactSubmission,
    shared::api::ApiResponse, AppState,
};

#[derive(Debug, Deserialize)]
struct SubmitContactRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    subject: Option<String>,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct SubmitContactResponse {
    id: Uuid,
}

/// The one unauthenticated write endpoint: the public site's contact form.
#[post("/api/contact")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubmitContactRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    let submission = ContactSubmission {
        name: req.name,
        email: req.email,
        subject: req.subject,
        message: req.message,
    };

    let contact = match submission.validated() {
        Ok(contact) => contact,
        Err(_) => return ApiResponse::bad_request("INVALID_DATA", "Invalid contact data"),
    };

    match data.contacts.create(contact).await {
        Ok(created) => ApiResponse::created(SubmitContactResponse { id: created.id }),

        Err(err) => {
            error!("Failed to store contact message: {}", err);
            ApiResponse::internal_error()
        }
    }
}
