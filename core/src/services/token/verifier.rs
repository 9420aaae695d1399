//! Access token verification

use std::sync::Arc;

use crate::domain::entities::TokenKind;
use crate::domain::value_objects::{VerifyFailure, VerifyResult};

use super::clock::Clock;
use super::keys::{read_kind_hint, SigningKeys};

const BEARER_PREFIX: &str = "bearer ";

/// Strip surrounding whitespace and an optional `Bearer ` prefix
///
/// The prefix is matched case-insensitively. Returns `None` when nothing is
/// left.
pub fn extract_token(presented: &str) -> Option<&str> {
    let trimmed = presented.trim();
    let without_prefix = match trimmed.get(..BEARER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => &trimmed[BEARER_PREFIX.len()..],
        _ => trimmed,
    };

    let token = without_prefix.trim();
    (!token.is_empty()).then_some(token)
}

/// Decides whether a presented string is a currently valid access token
#[derive(Clone)]
pub struct TokenVerifier {
    keys: Arc<SigningKeys>,
    clock: Arc<dyn Clock>,
    skew_seconds: i64,
}

impl TokenVerifier {
    pub fn new(keys: Arc<SigningKeys>, clock: Arc<dyn Clock>, skew_seconds: i64) -> Self {
        Self {
            keys,
            clock,
            skew_seconds,
        }
    }

    /// Verify a presented access token
    ///
    /// Total: every input, including garbage, yields a `VerifyResult`.
    pub fn verify(&self, presented: &str) -> VerifyResult {
        let Some(token) = extract_token(presented) else {
            return reject(VerifyFailure::InvalidToken);
        };

        let hint = read_kind_hint(token);
        let access = TokenKind::Access.as_str();

        let claims = match self.keys.decode_verified(
            token,
            TokenKind::Access,
            self.clock.now().timestamp(),
            self.skew_seconds,
        ) {
            Ok(claims) => claims,
            Err(VerifyFailure::InvalidToken)
                if hint.as_deref().is_some_and(|kind| kind != access) =>
            {
                return reject(VerifyFailure::InvalidTokenType);
            }
            Err(failure) => return reject(failure),
        };

        let kind = claims.kind.or(hint);
        if kind.as_deref() != Some(access) {
            return reject(VerifyFailure::InvalidTokenType);
        }

        VerifyResult::valid(claims.sub, claims.email)
    }
}

fn reject(failure: VerifyFailure) -> VerifyResult {
    tracing::debug!(reason = %failure, "Token verification failed");
    VerifyResult::invalid(failure)
}
