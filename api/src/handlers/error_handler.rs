//! Translation of flow errors into HTTP responses

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use tf_core::errors::{AuthError, ErrorCode};
use tf_shared::{error_codes, ErrorResponse};

/// Reason attached to request-shape failures
pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";

/// HTTP status for a canonical error code
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorCode::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::AlreadyExists => StatusCode::CONFLICT,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render a flow error
pub fn handle_auth_error(error: AuthError) -> HttpResponse {
    let code = error.code();
    let body = ErrorResponse::new(code.as_str(), error.reason(), error.to_string());
    HttpResponse::build(status_for(code)).json(body)
}

/// Render failed field validation as `INVALID_ARGUMENT`
pub fn validation_error(errors: ValidationErrors) -> HttpResponse {
    let body = ErrorResponse::new(
        error_codes::INVALID_ARGUMENT,
        VALIDATION_FAILED,
        "Invalid request data",
    )
    .add_detail("validation_errors", &errors);
    HttpResponse::BadRequest().json(body)
}

/// Render a rejected bearer token
pub fn unauthenticated(reason: &str) -> HttpResponse {
    let body = ErrorResponse::new(error_codes::UNAUTHENTICATED, reason, "Authentication required");
    HttpResponse::Unauthorized().json(body)
}

/// JSON extractor configuration answering malformed bodies with a
/// `VALIDATION_FAILED` envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected malformed request body");
    let body = ErrorResponse::new(
        error_codes::INVALID_ARGUMENT,
        VALIDATION_FAILED,
        "Malformed request body",
    );
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
