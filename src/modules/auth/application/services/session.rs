use actix_web::cookie::{time::Duration, Cookie, SameSite};
use rand::{distributions::Alphanumeric, Rng};

/// Name of the admin session cookie. Its presence is the sole
/// authentication signal; the value itself is never inspected.
pub const SESSION_COOKIE: &str = "admin-token";

const SESSION_TTL: Duration = Duration::days(7);

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid secret key")]
    InvalidKey,
}

/// Shared-secret auth gate. This is a single configured key for one admin,
/// not an identity system: no users, no expiry renewal, no rate limiting.
#[derive(Clone)]
pub struct SessionService {
    secret_key: String,
}

impl SessionService {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
        }
    }

    pub fn from_env() -> Self {
        let secret_key =
            std::env::var("ADMIN_SECRET_KEY").expect("ADMIN_SECRET_KEY is not set in .env file");
        Self::new(secret_key)
    }

    /// Compares the submitted key against the configured secret. On match,
    /// returns a week-long HTTP-only session cookie carrying an opaque
    /// random marker.
    pub fn login(&self, key: &str) -> Result<Cookie<'static>, SessionError> {
        if key != self.secret_key {
            return Err(SessionError::InvalidKey);
        }

        let marker: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();

        Ok(build_cookie(marker, SESSION_TTL))
    }

    /// Expired cookie that makes the browser drop the session marker.
    pub fn logout_cookie(&self) -> Cookie<'static> {
        build_cookie(String::new(), Duration::ZERO)
    }
}

fn build_cookie(value: String, ttl: Duration) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, value)
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(ttl)
        .finish()
}
