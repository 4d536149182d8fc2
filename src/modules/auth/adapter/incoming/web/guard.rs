use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    Error, HttpResponse,
};

use crate::auth::application::services::session::SESSION_COOKIE;

/// Boundary check for the `/admin` page scope. Unauthenticated requests to
/// any admin page other than the login page are redirected to the login
/// page; an authenticated request to the login page is sent back to the
/// admin home.
pub async fn admin_page_guard(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let authenticated = req.cookie(SESSION_COOKIE).is_some();
    let is_login_page = req.path() == "/admin/login";

    if !authenticated && !is_login_page {
        return Ok(redirect(req, "/admin/login"));
    }

    if authenticated && is_login_page {
        return Ok(redirect(req, "/admin"));
    }

    next.call(req)
        .await
        .map(ServiceResponse::map_into_boxed_body)
}

fn redirect(req: ServiceRequest, location: &str) -> ServiceResponse<BoxBody> {
    let (req, _) = req.into_parts();
    let resp = HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish();
    ServiceResponse::new(req, resp)
}
