//! Shared setup for gateway integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use tokio_util::sync::CancellationToken;

use tf_api::routes::AppState;
use tf_core::providers::InMemoryIdentityProvider;
use tf_core::services::identity::IdentityService;
use tf_core::services::token::{TokenService, TokenServiceConfig};

pub const EMAIL: &str = "user@example.com";
pub const PASSWORD: &str = "correct";

pub struct TestContext {
    pub state: web::Data<AppState<InMemoryIdentityProvider>>,
    pub provider: Arc<InMemoryIdentityProvider>,
    pub shutdown: CancellationToken,
    pub user_id: String,
}

/// App state backed by an in-memory provider holding one confirmed user
pub async fn test_context() -> TestContext {
    let provider = Arc::new(InMemoryIdentityProvider::new());
    let user = provider.insert_user(EMAIL, PASSWORD, true).await;

    let tokens = Arc::new(
        TokenService::new(TokenServiceConfig::new("test-access-secret", "test-refresh-secret"))
            .unwrap(),
    );
    let identity = Arc::new(IdentityService::new(provider.clone(), tokens));
    let shutdown = CancellationToken::new();

    TestContext {
        state: web::Data::new(AppState::new(identity, shutdown.clone())),
        provider,
        shutdown,
        user_id: user.id,
    }
}
