//! Token entities for JWT-based session authentication.

use chrono::{DateTime, TimeDelta, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value of `TokenPair::token_type`
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Closed set of token kinds, carried in the `kind` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived token authorizing API calls
    Access,
    /// Longer-lived token used only to obtain a new pair
    Refresh,
}

impl TokenKind {
    /// Wire representation of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::AccessClaims {}
    impl Sealed for super::RefreshClaims {}
}

/// Claims that can be signed into a token
///
/// The kind is a property of the claims type, so the signing key is chosen
/// from the type and an access claims value can never be signed with the
/// refresh key (or the reverse). Sealed: only the two claim shapes below
/// implement it.
pub trait TokenClaims: Serialize + DeserializeOwned + sealed::Sealed {
    /// Kind every value of this type carries
    const KIND: TokenKind;

    /// Subject (identity id)
    fn subject(&self) -> &str;

    /// Expiration timestamp (seconds since epoch)
    fn expires_at(&self) -> i64;
}

/// Claims structure for access tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (identity id)
    pub sub: String,

    /// Email of the identity, absent on tokens minted by rotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    kind: TokenKind,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Unique token id
    pub jti: String,
}

impl AccessClaims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `subject` - The identity id
    /// * `email` - The identity email, if known
    /// * `issued_at` - Issuance instant
    /// * `ttl_seconds` - Lifetime in seconds
    ///
    /// Returns `None` when the expiry falls outside the representable range.
    pub fn new(
        subject: impl Into<String>,
        email: Option<String>,
        issued_at: DateTime<Utc>,
        ttl_seconds: i64,
    ) -> Option<Self> {
        Some(Self {
            sub: subject.into(),
            email,
            kind: TokenKind::Access,
            iat: issued_at.timestamp(),
            exp: expiry(issued_at, ttl_seconds)?,
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// Kind claim, always `access`
    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

impl TokenClaims for AccessClaims {
    const KIND: TokenKind = TokenKind::Access;

    fn subject(&self) -> &str {
        &self.sub
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }
}

/// Claims structure for refresh tokens
///
/// Carries no email so that a logged refresh token exposes only the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (identity id)
    pub sub: String,

    kind: TokenKind,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Unique token id
    pub jti: String,
}

impl RefreshClaims {
    /// Creates new claims for a refresh token, `None` if the expiry overflows
    pub fn new(
        subject: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl_seconds: i64,
    ) -> Option<Self> {
        Some(Self {
            sub: subject.into(),
            kind: TokenKind::Refresh,
            iat: issued_at.timestamp(),
            exp: expiry(issued_at, ttl_seconds)?,
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// Kind claim, always `refresh`
    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

impl TokenClaims for RefreshClaims {
    const KIND: TokenKind = TokenKind::Refresh;

    fn subject(&self) -> &str {
        &self.sub
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }
}

fn expiry(issued_at: DateTime<Utc>, ttl_seconds: i64) -> Option<i64> {
    let ttl = TimeDelta::try_seconds(ttl_seconds)?;
    issued_at.checked_add_signed(ttl).map(|exp| exp.timestamp())
}

/// Token pair returned by every issuance or rotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access claims
    pub access_token: String,

    /// Signed refresh claims
    pub refresh_token: String,

    /// Seconds until the access token expires
    pub expires_in: i64,

    /// Always `Bearer`
    pub token_type: String,
}

impl TokenPair {
    /// Creates a bearer token pair
    pub fn bearer(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
            token_type: TOKEN_TYPE_BEARER.to_string(),
        }
    }
}
