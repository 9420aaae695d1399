use actix_web::{web, HttpResponse};
use validator::Validate;

use tf_core::providers::IdentityProvider;

use crate::dto::auth_dto::{SignUpRequest, SignUpResponse};
use crate::handlers::error_handler::{handle_auth_error, validation_error};

use super::AppState;

/// Handler for POST /api/v1/auth/sign-up
///
/// Registers an account with the identity provider. No tokens are issued;
/// the account is confirmed through `/auth/verify-otp`.
///
/// ## Errors
/// - 400 Bad Request: malformed email (`VALIDATION_FAILED`) or registration
///   rejected (`SIGN_UP_FAILED`)
pub async fn sign_up<P: IdentityProvider + 'static>(
    state: web::Data<AppState<P>>,
    request: web::Json<SignUpRequest>,
) -> HttpResponse {
    if let Err(errors) = request.validate() {
        return validation_error(errors);
    }

    let cancel = state.request_token();
    match state
        .identity
        .sign_up(&request.email, &request.password, &cancel)
        .await
    {
        Ok(success) => HttpResponse::Ok().json(SignUpResponse { success }),
        Err(error) => handle_auth_error(error),
    }
}
