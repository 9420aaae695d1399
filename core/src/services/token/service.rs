//! Token service facade

use std::sync::Arc;

use tf_shared::ConfigError;

use crate::domain::entities::{Identity, TokenPair};
use crate::domain::value_objects::VerifyResult;
use crate::errors::AuthResult;

use super::clock::{Clock, SystemClock};
use super::config::TokenServiceConfig;
use super::issuer::TokenIssuer;
use super::keys::SigningKeys;
use super::rotator::RefreshRotator;
use super::verifier::TokenVerifier;

/// Stateless session token lifecycle: issue, verify, rotate
///
/// Holds only immutable key material and configuration, so a single instance
/// is shared across all requests behind an `Arc`.
#[derive(Clone)]
pub struct TokenService {
    issuer: TokenIssuer,
    verifier: TokenVerifier,
    rotator: RefreshRotator,
}

impl TokenService {
    /// Creates a token service reading time from the system clock
    ///
    /// # Errors
    ///
    /// Fails when a secret is empty or both secrets are equal.
    pub fn new(config: TokenServiceConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a token service with an explicit time source
    pub fn with_clock(
        config: TokenServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let keys = Arc::new(SigningKeys::new(&config));
        let issuer = TokenIssuer::new(&config, keys.clone(), clock.clone());
        let verifier = TokenVerifier::new(keys.clone(), clock.clone(), config.clock_skew_seconds);
        let rotator = RefreshRotator::new(issuer.clone(), keys, clock, config.clock_skew_seconds);

        Ok(Self {
            issuer,
            verifier,
            rotator,
        })
    }

    /// Issue a fresh pair for an authenticated identity
    pub fn issue_pair(&self, identity: &Identity) -> AuthResult<TokenPair> {
        self.issuer.issue_pair(identity)
    }

    /// Verify a presented access token, optionally prefixed with `Bearer `
    pub fn verify(&self, presented: &str) -> VerifyResult {
        self.verifier.verify(presented)
    }

    /// Exchange a refresh token for a new pair
    pub fn rotate(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        self.rotator.rotate(refresh_token)
    }

    /// Underlying issuer
    pub fn issuer(&self) -> &TokenIssuer {
        &self.issuer
    }
}
