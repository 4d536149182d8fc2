use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::auth::application::services::session::SESSION_COOKIE;
use crate::shared::api::ApiResponse;

/// Proof that the request carries the admin session cookie. Every
/// `/api/admin/*` handler takes this extractor; presence of the cookie is
/// the entire check.
#[derive(Debug, Clone)]
pub struct AdminSession;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.cookie(SESSION_COOKIE) {
            Some(_) => ready(Ok(AdminSession)),
            None => ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_SESSION",
                "Admin session required",
            )))),
        }
    }
}
