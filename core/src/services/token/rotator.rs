//! Refresh token rotation

use std::sync::Arc;

use crate::domain::entities::{TokenKind, TokenPair};
use crate::errors::{AuthError, AuthResult};

use super::clock::Clock;
use super::issuer::TokenIssuer;
use super::keys::SigningKeys;

/// Exchanges a valid refresh token for a brand-new pair
///
/// The presented token is not invalidated; there is no revocation store, so
/// it stays usable until its own expiry.
#[derive(Clone)]
pub struct RefreshRotator {
    issuer: TokenIssuer,
    keys: Arc<SigningKeys>,
    clock: Arc<dyn Clock>,
    skew_seconds: i64,
}

impl RefreshRotator {
    pub fn new(
        issuer: TokenIssuer,
        keys: Arc<SigningKeys>,
        clock: Arc<dyn Clock>,
        skew_seconds: i64,
    ) -> Self {
        Self {
            issuer,
            keys,
            clock,
            skew_seconds,
        }
    }

    /// Rotate a refresh token
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidRefreshToken` - empty, badly signed, expired, or
    ///   not a refresh token
    /// * `AuthError::TokenIssuanceFailed` - the new pair could not be signed
    pub fn rotate(&self, refresh_token: &str) -> AuthResult<TokenPair> {
        let token = refresh_token.trim();
        if token.is_empty() {
            tracing::warn!("Empty refresh token presented");
            return Err(AuthError::InvalidRefreshToken);
        }

        let claims = self
            .keys
            .decode_verified(
                token,
                TokenKind::Refresh,
                self.clock.now().timestamp(),
                self.skew_seconds,
            )
            .map_err(|failure| {
                tracing::warn!(reason = %failure, "Refresh token rejected");
                AuthError::InvalidRefreshToken
            })?;

        if claims.kind.as_deref() != Some(TokenKind::Refresh.as_str()) {
            tracing::warn!(subject = %claims.sub, "Refresh token carries wrong kind");
            return Err(AuthError::InvalidRefreshToken);
        }

        // Refresh claims carry no email, so neither does the new access token
        self.issuer.issue_pair_for_subject(&claims.sub, None)
    }
}
