use actix_web::{web, HttpResponse};
use validator::Validate;

use tf_core::providers::IdentityProvider;

use crate::dto::auth_dto::VerifyOtpRequest;
use crate::handlers::error_handler::{handle_auth_error, validation_error};

use super::AppState;

/// Handler for POST /api/v1/auth/verify-otp
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "code": "123456"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `VALIDATION_FAILED` or `INVALID_OTP`
/// - 500 Internal Server Error: `OTP_VERIFICATION_ERROR` when the provider
///   failed unexpectedly
pub async fn verify_otp<P: IdentityProvider + 'static>(
    state: web::Data<AppState<P>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error(errors);
    }

    let cancel = state.request_token();
    match state
        .identity
        .verify_otp(&request.email, &request.code, &cancel)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(error) => handle_auth_error(error),
    }
}
