use actix_web::{web, HttpResponse};

use tf_core::providers::IdentityProvider;

use crate::handlers::error_handler::handle_auth_error;
use crate::middleware::AuthContext;
use crate::routes::auth::AppState;

/// Handler for GET /api/v1/users/{id}
///
/// Requires a valid access token.
///
/// ## Errors
/// - 401 Unauthorized: missing or invalid bearer token
/// - 404 Not Found: `USER_NOT_FOUND`
pub async fn get_user<P: IdentityProvider + 'static>(
    auth: AuthContext,
    state: web::Data<AppState<P>>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    tracing::debug!(requested_by = %auth.subject, user_id = %id, "Looking up user");

    let cancel = state.request_token();
    match state.identity.get_user(&id, &cancel).await {
        Ok(identity) => HttpResponse::Ok().json(identity),
        Err(error) => handle_auth_error(error),
    }
}
