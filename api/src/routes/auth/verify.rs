use actix_web::{http::header::AUTHORIZATION, web, HttpRequest, HttpResponse};

use tf_core::providers::IdentityProvider;

use crate::dto::auth_dto::VerifyTokenRequest;

use super::AppState;

/// Handler for POST /api/v1/auth/verify
///
/// Takes the token from the body (`{"token": "..."}`) or, failing that, from
/// the `Authorization` header. Always answers 200 with a verification result:
///
/// ```json
/// {
///     "valid": false,
///     "subject": null,
///     "email": null,
///     "reason": "TOKEN_EXPIRED"
/// }
/// ```
pub async fn verify<P: IdentityProvider + 'static>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    body: Option<web::Json<VerifyTokenRequest>>,
) -> HttpResponse {
    let from_body = body.and_then(|b| b.into_inner().token);
    let from_header = || {
        req.headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    let presented = from_body.or_else(from_header).unwrap_or_default();

    HttpResponse::Ok().json(state.identity.verify(&presented))
}
