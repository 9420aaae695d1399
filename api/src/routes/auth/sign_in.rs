use actix_web::{web, HttpResponse};

use tf_core::providers::IdentityProvider;

use crate::dto::auth_dto::SignInRequest;
use crate::handlers::error_handler::handle_auth_error;

use super::AppState;

/// Handler for POST /api/v1/auth/sign-in
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "password": "string"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "expires_in": 900,
///     "token_type": "Bearer"
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: `WRONG_CREDENTIALS`
/// - 500 Internal Server Error: token issuance failure or cancelled request
pub async fn sign_in<P: IdentityProvider + 'static>(
    state: web::Data<AppState<P>>,
    request: web::Json<SignInRequest>,
) -> HttpResponse {
    let cancel = state.request_token();
    match state
        .identity
        .sign_in(&request.email, &request.password, &cancel)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(error) => handle_auth_error(error),
    }
}
