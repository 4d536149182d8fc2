use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::application::services::session::SessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub key: String,
}

#[derive(Serialize)]
struct LoginResponseBody {
    message: &'static str,
}

/// Admin login: a single shared-secret comparison. On match the session
/// cookie is attached to the response; on mismatch no cookie is issued.
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!("Admin login attempt");

    match data.sessions.login(&req.key) {
        Ok(cookie) => {
            info!("Admin session issued");
            HttpResponse::Ok().cookie(cookie).json(ApiResponse {
                success: true,
                data: Some(LoginResponseBody {
                    message: "Logged in",
                }),
                error: None,
            })
        }

        Err(SessionError::InvalidKey) => {
            warn!("Admin login rejected: invalid secret key");
            ApiResponse::unauthorized("INVALID_KEY", "Invalid secret key")
        }
    }
}
