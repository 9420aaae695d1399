use actix_web::{web, HttpResponse};

use tf_core::providers::IdentityProvider;

use crate::dto::auth_dto::RefreshTokenRequest;
use crate::handlers::error_handler::handle_auth_error;

use super::AppState;

/// Handler for POST /api/v1/auth/refresh
///
/// Exchanges a refresh token for a new pair. The presented token stays valid
/// until it expires.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: `INVALID_REFRESH_TOKEN`
pub async fn refresh<P: IdentityProvider + 'static>(
    state: web::Data<AppState<P>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse {
    match state.identity.refresh(&request.refresh_token) {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(error) => handle_auth_error(error),
    }
}
