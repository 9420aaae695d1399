//! HS256 key material and claim decoding

use jsonwebtoken::{decode, Algorithm, DecodingKey, EncodingKey, Validation};
use serde::Deserialize;

use crate::domain::entities::TokenKind;
use crate::domain::value_objects::VerifyFailure;
use crate::errors::classify_jwt_error;

use super::config::TokenServiceConfig;

/// Claims as read back from a verified token of either kind
#[derive(Debug, Clone, Deserialize)]
pub struct DecodedClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub iat: Option<i64>,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
struct KindHint {
    #[serde(default)]
    kind: Option<String>,
}

/// Signing and verification keys, one pair per token kind
#[derive(Clone)]
pub struct SigningKeys {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    validation: Validation,
}

impl SigningKeys {
    pub fn new(config: &TokenServiceConfig) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation: signature_validation(),
        }
    }

    /// Key that signs tokens of the given kind
    pub fn encoding_key(&self, kind: TokenKind) -> &EncodingKey {
        match kind {
            TokenKind::Access => &self.access_encoding,
            TokenKind::Refresh => &self.refresh_encoding,
        }
    }

    fn decoding_key(&self, kind: TokenKind) -> &DecodingKey {
        match kind {
            TokenKind::Access => &self.access_decoding,
            TokenKind::Refresh => &self.refresh_decoding,
        }
    }

    /// Check the signature with the key for `kind`, then the expiry with
    /// `skew_seconds` of leeway
    ///
    /// The `kind` claim itself is not inspected here.
    pub fn decode_verified(
        &self,
        token: &str,
        kind: TokenKind,
        now: i64,
        skew_seconds: i64,
    ) -> Result<DecodedClaims, VerifyFailure> {
        let data = decode::<DecodedClaims>(token, self.decoding_key(kind), &self.validation)
            .map_err(|e| classify_jwt_error(&e))?;

        let claims = data.claims;
        if claims.exp.saturating_add(skew_seconds) < now {
            return Err(VerifyFailure::TokenExpired);
        }
        Ok(claims)
    }
}

/// Validation for signed tokens
///
/// Expiry is checked by hand against the injected clock.
fn signature_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp", "sub"]);
    validation
}

fn hint_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();
    validation
}

/// Declared `kind` of a token, read without checking its signature
///
/// Only ever used to pick a failure reason.
pub fn read_kind_hint(token: &str) -> Option<String> {
    decode::<KindHint>(token, &DecodingKey::from_secret(&[]), &hint_validation())
        .ok()
        .and_then(|data| data.claims.kind)
}
