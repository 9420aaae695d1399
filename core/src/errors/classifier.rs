//! Closed mapping from failure conditions to canonical errors

use jsonwebtoken::errors::{Error as JwtError, ErrorKind as JwtErrorKind};

use crate::domain::value_objects::VerifyFailure;

use super::{AuthError, ProviderError};

/// Flow in which a provider call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    SignIn,
    SignUp,
    VerifyOtp,
    GetUser,
    CreateProfile,
}

impl ProviderError {
    /// Classify a provider failure for the flow it occurred in
    pub fn classify(&self, flow: Flow) -> AuthError {
        match flow {
            Flow::SignIn => AuthError::WrongCredentials,
            Flow::SignUp => AuthError::SignUpFailed,
            Flow::VerifyOtp if self.is_fault() => AuthError::OtpVerificationError,
            Flow::VerifyOtp => AuthError::InvalidOtp,
            Flow::GetUser => AuthError::UserNotFound,
            Flow::CreateProfile => match self {
                ProviderError::AlreadyRegistered => AuthError::AlreadyExists,
                _ => AuthError::Internal,
            },
        }
    }
}

/// Classify a signature/structure failure from the JWT library
pub fn classify_jwt_error(error: &JwtError) -> VerifyFailure {
    match error.kind() {
        JwtErrorKind::ExpiredSignature => VerifyFailure::TokenExpired,
        _ => VerifyFailure::InvalidToken,
    }
}
