use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Maps JSON extractor failures to the standard 400 error envelope so
/// malformed bodies do not fall through to actix's plain-text default.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
