use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use tf_api::app::create_app;
use tf_api::config;
use tf_api::routes::AppState;
use tf_core::providers::{IdentityProvider, InMemoryIdentityProvider};
use tf_core::services::identity::IdentityService;
use tf_core::services::token::{TokenService, TokenServiceConfig};
use tf_infra::HttpIdentityProvider;
use tf_shared::{AppConfig, ProviderKind};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load()?;
    config::init_tracing(&config.logging)?;

    info!(environment = %config.environment, "Starting Taskforge gateway");
    if config.jwt.is_using_default_secret() {
        warn!("Using development JWT secrets; set JWT_ACCESS_SECRET and JWT_REFRESH_SECRET");
    }

    let tokens = Arc::new(
        TokenService::new(TokenServiceConfig::from(&config.jwt))
            .context("invalid token configuration")?,
    );

    match config.identity_provider.kind {
        ProviderKind::Memory => {
            warn!("Using in-memory identity provider; accounts are lost on restart");
            serve(&config, Arc::new(InMemoryIdentityProvider::new()), tokens).await
        }
        ProviderKind::Http => {
            let provider = HttpIdentityProvider::from_config(&config.identity_provider)
                .context("failed to create identity provider client")?;
            serve(&config, Arc::new(provider), tokens).await
        }
    }
}

/// Run the HTTP server until Ctrl-C
///
/// On shutdown the shared cancellation token is cancelled first, so flows
/// still waiting on the identity provider end with `REQUEST_CANCELLED`.
async fn serve<P: IdentityProvider + 'static>(
    config: &AppConfig,
    provider: Arc<P>,
    tokens: Arc<TokenService>,
) -> anyhow::Result<()> {
    let shutdown = CancellationToken::new();
    let identity = Arc::new(IdentityService::new(provider, tokens));
    let state = web::Data::new(AppState::new(identity, shutdown.clone()));

    let bind_address = config.server.bind_address();
    info!(%bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone()))
        .disable_signals()
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?;
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested");
            shutdown.cancel();
            handle.stop(true).await;
        }
    });

    server.await.context("server error")
}
