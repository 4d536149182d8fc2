pub mod app_state_builder;
pub mod stubs;

use actix_web::cookie::Cookie;

use crate::auth::application::services::session::SESSION_COOKIE;

/// Session cookie accepted by the `AdminSession` extractor. The value is
/// opaque to the server; any non-empty marker passes.
pub fn admin_cookie() -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, "test-session")
}
