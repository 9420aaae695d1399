//! Errors reported by identity provider implementations

use thiserror::Error;

/// Provider-specific failure
///
/// Messages may contain raw provider text and are for operators only; flows
/// always classify these into an `AuthError` before returning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid or expired one-time code")]
    InvalidCode,

    #[error("user not found")]
    NotFound,

    #[error("user already registered")]
    AlreadyRegistered,

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("unexpected provider response: {0}")]
    Unexpected(String),
}

impl ProviderError {
    /// Whether the failure is a transport or provider-side fault rather than
    /// a verdict about the request
    pub fn is_fault(&self) -> bool {
        matches!(self, ProviderError::Unavailable(_) | ProviderError::Unexpected(_))
    }
}
