//! Error taxonomy for the identity flows.
//!
//! Two separate vocabularies exist. Flow-level failures (`AuthError`) carry one
//! of five canonical codes and propagate to the caller as explicit error
//! values. Token verification failures are not errors at all and use
//! `VerifyFailure` (see `domain::value_objects`).

mod classifier;
mod provider;


pub use classifier::{classify_jwt_error, Flow};
pub use provider::ProviderError;

use serde::Serialize;
use thiserror::Error;

/// Canonical flow-level error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Unauthenticated,
    InvalidArgument,
    NotFound,
    AlreadyExists,
    Internal,
}

impl ErrorCode {
    /// Wire representation of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unauthenticated => "UNAUTHENTICATED",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flow-level failures
///
/// Display messages are fixed strings; provider and cryptographic details are
/// logged where they occur and never carried in here.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    WrongCredentials,

    #[error("Registration was rejected")]
    SignUpFailed,

    #[error("Invalid or expired one-time code")]
    InvalidOtp,

    #[error("One-time code verification failed")]
    OtpVerificationError,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Resource already exists")]
    AlreadyExists,

    #[error("Token issuance failed")]
    TokenIssuanceFailed,

    #[error("Request cancelled")]
    Cancelled,

    #[error("Internal error")]
    Internal,
}

impl AuthError {
    /// Canonical code the caller branches on
    pub fn code(&self) -> ErrorCode {
        match self {
            AuthError::WrongCredentials | AuthError::InvalidRefreshToken => {
                ErrorCode::Unauthenticated
            }
            AuthError::SignUpFailed | AuthError::InvalidOtp => ErrorCode::InvalidArgument,
            AuthError::UserNotFound => ErrorCode::NotFound,
            AuthError::AlreadyExists => ErrorCode::AlreadyExists,
            AuthError::OtpVerificationError
            | AuthError::TokenIssuanceFailed
            | AuthError::Cancelled
            | AuthError::Internal => ErrorCode::Internal,
        }
    }

    /// Stable reason string
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::WrongCredentials => "WRONG_CREDENTIALS",
            AuthError::SignUpFailed => "SIGN_UP_FAILED",
            AuthError::InvalidOtp => "INVALID_OTP",
            AuthError::OtpVerificationError => "OTP_VERIFICATION_ERROR",
            AuthError::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::AlreadyExists => "ALREADY_EXISTS",
            AuthError::TokenIssuanceFailed => "TOKEN_ISSUANCE_FAILED",
            AuthError::Cancelled => "REQUEST_CANCELLED",
            AuthError::Internal => "INTERNAL_ERROR",
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
