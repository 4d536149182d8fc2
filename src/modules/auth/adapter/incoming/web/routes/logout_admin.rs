use actix_web::{http::header, post, web, HttpResponse, Responder};
use tracing::info;

use crate::AppState;

/// Logout is a plain form post from the admin shell: drop the cookie and
/// send the browser back to the login page.
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(data: web::Data<AppState>) -> impl Responder {
    info!("Admin logged out");

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/admin/login"))
        .cookie(data.sessions.logout_cookie())
        .finish()
}
