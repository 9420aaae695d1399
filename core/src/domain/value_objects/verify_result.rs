//! Outcome of verifying a presented access token.
//!
//! Verification failing is routine (stale client tokens), so it is modelled as
//! a value with a reason rather than as an error.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Why a presented token was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerifyFailure {
    /// Signature valid but expired beyond the skew tolerance
    TokenExpired,
    /// Token is not an access token
    InvalidTokenType,
    /// Empty, malformed or badly signed
    InvalidToken,
}

impl VerifyFailure {
    /// Stable reason string
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyFailure::TokenExpired => "TOKEN_EXPIRED",
            VerifyFailure::InvalidTokenType => "INVALID_TOKEN_TYPE",
            VerifyFailure::InvalidToken => "INVALID_TOKEN",
        }
    }
}

impl std::fmt::Display for VerifyFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VerifyFailure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TOKEN_EXPIRED" => Ok(VerifyFailure::TokenExpired),
            "INVALID_TOKEN_TYPE" => Ok(VerifyFailure::InvalidTokenType),
            "INVALID_TOKEN" => Ok(VerifyFailure::InvalidToken),
            other => Err(format!("unknown verification reason: {}", other)),
        }
    }
}

/// Result of a verification call
///
/// Serializes as `{"valid", "subject", "email", "reason"}` with `reason`
/// being the empty string for a valid token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResult {
    pub valid: bool,
    pub subject: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "reason", with = "reason_code")]
    pub failure: Option<VerifyFailure>,
}

impl VerifyResult {
    /// Accepted token
    pub fn valid(subject: String, email: Option<String>) -> Self {
        Self {
            valid: true,
            subject: Some(subject),
            email,
            failure: None,
        }
    }

    /// Rejected token
    pub fn invalid(failure: VerifyFailure) -> Self {
        Self {
            valid: false,
            subject: None,
            email: None,
            failure: Some(failure),
        }
    }

    /// Reason string, empty when valid
    pub fn reason(&self) -> &'static str {
        self.failure.map(|f| f.as_str()).unwrap_or("")
    }
}

mod reason_code {
    use super::*;

    pub fn serialize<S: Serializer>(
        failure: &Option<VerifyFailure>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(failure.map(|f| f.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<VerifyFailure>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}
