//! Application factory
//!
//! Builds the Actix-web application around a shared `AppState`.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use tf_core::providers::IdentityProvider;
use tf_shared::{error_codes, ErrorResponse};

use crate::handlers::error_handler::json_config;
use crate::middleware::auth::JwtAuth;
use crate::routes::auth::{refresh, sign_in, sign_up, verify, verify_otp, AppState};
use crate::routes::users::get_user;

/// Create and configure the application with all dependencies
pub fn create_app<P>(
    app_state: web::Data<AppState<P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: IdentityProvider + 'static,
{
    let jwt_auth = JwtAuth::new(app_state.identity.tokens().clone());

    App::new()
        .app_data(app_state)
        .app_data(json_config())
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/sign-in", web::post().to(sign_in::<P>))
                        .route("/sign-up", web::post().to(sign_up::<P>))
                        .route("/verify-otp", web::post().to(verify_otp::<P>))
                        .route("/refresh", web::post().to(refresh::<P>))
                        .route("/verify", web::post().to(verify::<P>)),
                )
                .service(
                    web::scope("/users")
                        .wrap(jwt_auth)
                        .route("/{id}", web::get().to(get_user::<P>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "taskforge-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "ROUTE_NOT_FOUND",
        "The requested resource was not found",
    ))
}
