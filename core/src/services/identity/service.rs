//! Identity flows: provider calls followed by token issuance

use std::future::Future;
use std::sync::Arc;

use tf_shared::validation::{is_valid_email, mask_email, normalize_email};
use tokio_util::sync::CancellationToken;

use crate::domain::entities::{Identity, TokenPair};
use crate::domain::value_objects::VerifyResult;
use crate::errors::{AuthError, AuthResult, Flow, ProviderError};
use crate::providers::IdentityProvider;
use crate::services::token::TokenService;

/// Orchestrates the identity provider and the token service
///
/// Every provider-calling flow takes a cancellation token. A flow cancelled
/// before or during the provider call returns `AuthError::Cancelled` and never
/// issues tokens.
pub struct IdentityService<P: IdentityProvider> {
    provider: Arc<P>,
    tokens: Arc<TokenService>,
}

impl<P: IdentityProvider> IdentityService<P> {
    /// Creates a new identity service
    ///
    /// # Arguments
    ///
    /// * `provider` - External identity provider
    /// * `tokens` - Token service used to mint and check session tokens
    pub fn new(provider: Arc<P>, tokens: Arc<TokenService>) -> Self {
        Self { provider, tokens }
    }

    /// Token service shared with the gateway middleware
    pub fn tokens(&self) -> &Arc<TokenService> {
        &self.tokens
    }

    /// Sign in with email and password
    ///
    /// Every provider failure, including outages, surfaces as
    /// `WRONG_CREDENTIALS`.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        cancel: &CancellationToken,
    ) -> AuthResult<TokenPair> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            tracing::warn!("Sign-in attempted without credentials");
            return Err(AuthError::WrongCredentials);
        }

        let user = self
            .call_provider(
                Flow::SignIn,
                cancel,
                self.provider.verify_credentials(&email, password),
            )
            .await?;

        let pair = self.issue(Identity::from(user), cancel)?;
        tracing::info!(email = %mask_email(&email), "User signed in");
        Ok(pair)
    }

    /// Register a new account
    ///
    /// Returns `true` once the provider accepted the registration. The
    /// account is confirmed later through [`Self::verify_otp`]. Malformed
    /// addresses are refused without a provider call.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        cancel: &CancellationToken,
    ) -> AuthResult<bool> {
        let email = normalize_email(email);
        if !is_valid_email(&email) || password.is_empty() {
            tracing::warn!(email = %mask_email(&email), "Sign-up rejected before reaching provider");
            return Err(AuthError::SignUpFailed);
        }

        let user = self
            .call_provider(Flow::SignUp, cancel, self.provider.register(&email, password))
            .await?;

        tracing::info!(user_id = %user.id, email = %mask_email(&email), "User registered");
        Ok(true)
    }

    /// Confirm a one-time code and sign the user in
    pub async fn verify_otp(
        &self,
        email: &str,
        code: &str,
        cancel: &CancellationToken,
    ) -> AuthResult<TokenPair> {
        let email = normalize_email(email);
        let code = code.trim();
        if email.is_empty() || code.is_empty() {
            tracing::warn!("One-time code verification attempted without input");
            return Err(AuthError::InvalidOtp);
        }

        let user = self
            .call_provider(
                Flow::VerifyOtp,
                cancel,
                self.provider.verify_one_time_code(&email, code),
            )
            .await?;

        let pair = self.issue(Identity::from(user), cancel)?;
        tracing::info!(email = %mask_email(&email), "One-time code accepted");
        Ok(pair)
    }

    /// Look up an identity by id
    pub async fn get_user(&self, id: &str, cancel: &CancellationToken) -> AuthResult<Identity> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AuthError::UserNotFound);
        }

        let user = self
            .call_provider(Flow::GetUser, cancel, self.provider.get_by_id(id))
            .await?;
        Ok(Identity::from(user))
    }

    /// Exchange a refresh token for a new pair
    pub fn refresh(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        self.tokens.rotate(refresh_token)
    }

    /// Verify an access token, optionally prefixed with `Bearer `
    pub fn verify(&self, token: &str) -> VerifyResult {
        self.tokens.verify(token)
    }

    fn issue(&self, identity: Identity, cancel: &CancellationToken) -> AuthResult<TokenPair> {
        if cancel.is_cancelled() {
            tracing::info!(user_id = %identity.id, "Flow cancelled before token issuance");
            return Err(AuthError::Cancelled);
        }
        self.tokens.issue_pair(&identity)
    }

    /// Await a provider call unless the flow is cancelled first
    async fn call_provider<T, F>(
        &self,
        flow: Flow,
        cancel: &CancellationToken,
        call: F,
    ) -> AuthResult<T>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                tracing::info!(?flow, "Identity flow cancelled");
                Err(AuthError::Cancelled)
            }
            result = call => result.map_err(|e| {
                let classified = e.classify(flow);
                if e.is_fault() {
                    tracing::error!(?flow, error = %e, reason = classified.reason(), "Identity provider failure");
                } else {
                    tracing::warn!(?flow, error = %e, reason = classified.reason(), "Identity provider rejected request");
                }
                classified
            }),
        }
    }
}
