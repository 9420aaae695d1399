//! Token issuance

use std::sync::Arc;

use jsonwebtoken::{encode, Algorithm, Header};

use crate::domain::entities::{
    AccessClaims, Identity, RefreshClaims, TokenClaims, TokenKind, TokenPair,
};
use crate::errors::{AuthError, AuthResult};

use super::clock::Clock;
use super::config::TokenServiceConfig;
use super::keys::SigningKeys;

/// Signs access and refresh tokens
#[derive(Clone)]
pub struct TokenIssuer {
    keys: Arc<SigningKeys>,
    clock: Arc<dyn Clock>,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
}

impl TokenIssuer {
    pub fn new(config: &TokenServiceConfig, keys: Arc<SigningKeys>, clock: Arc<dyn Clock>) -> Self {
        Self {
            keys,
            clock,
            access_ttl_seconds: config.access_ttl_seconds(),
            refresh_ttl_seconds: config.refresh_ttl_seconds(),
        }
    }

    /// Seconds until a freshly issued access token expires
    pub fn expires_in(&self) -> i64 {
        self.access_ttl_seconds
    }

    /// Sign claims with the key belonging to their kind
    pub fn sign<C: TokenClaims>(&self, claims: &C) -> AuthResult<String> {
        let kind = C::KIND;
        let token = encode(&Header::new(Algorithm::HS256), claims, self.keys.encoding_key(kind))
            .map_err(|e| {
                tracing::error!(error = %e, kind = %kind, subject = claims.subject(), "Failed to sign token");
                AuthError::TokenIssuanceFailed
            })?;
        tracing::trace!(kind = %kind, expires_at = claims.expires_at(), "Signed token");
        Ok(token)
    }

    /// Issue an access token for an identity
    pub fn issue_access(&self, identity: &Identity) -> AuthResult<String> {
        let email = Some(identity.email.clone()).filter(|e| !e.is_empty());
        self.issue_access_for_subject(&identity.id, email)
    }

    /// Issue a refresh token for a subject
    pub fn issue_refresh(&self, subject: &str) -> AuthResult<String> {
        let claims = RefreshClaims::new(subject, self.clock.now(), self.refresh_ttl_seconds)
            .ok_or_else(|| expiry_out_of_range(TokenKind::Refresh, self.refresh_ttl_seconds))?;
        self.sign(&claims)
    }

    /// Issue a fresh access/refresh pair for an identity
    pub fn issue_pair(&self, identity: &Identity) -> AuthResult<TokenPair> {
        let email = Some(identity.email.clone()).filter(|e| !e.is_empty());
        self.issue_pair_for_subject(&identity.id, email)
    }

    /// Issue a pair when only the subject (and possibly the email) is known
    pub fn issue_pair_for_subject(
        &self,
        subject: &str,
        email: Option<String>,
    ) -> AuthResult<TokenPair> {
        let access_token = self.issue_access_for_subject(subject, email)?;
        let refresh_token = self.issue_refresh(subject)?;
        tracing::debug!(subject, "Issued token pair");

        Ok(TokenPair::bearer(
            access_token,
            refresh_token,
            self.access_ttl_seconds,
        ))
    }

    fn issue_access_for_subject(&self, subject: &str, email: Option<String>) -> AuthResult<String> {
        let claims = AccessClaims::new(subject, email, self.clock.now(), self.access_ttl_seconds)
            .ok_or_else(|| expiry_out_of_range(TokenKind::Access, self.access_ttl_seconds))?;
        self.sign(&claims)
    }
}

fn expiry_out_of_range(kind: TokenKind, ttl_seconds: i64) -> AuthError {
    tracing::error!(kind = %kind, ttl_seconds, "Configured token lifetime is out of range");
    AuthError::TokenIssuanceFailed
}
