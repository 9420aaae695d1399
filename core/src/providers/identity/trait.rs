//! Identity provider trait defining the boundary to credential storage.
//!
//! The provider owns credential storage, password verification, registration
//! and one-time-code validation. Every method returns the provider-native
//! user record or a `ProviderError`; flows translate the record into an
//! `Identity` and classify the error, so nothing provider-specific reaches
//! the caller.

use async_trait::async_trait;

use crate::domain::entities::ProviderUser;
use crate::errors::ProviderError;

/// Contract required from an identity provider
///
/// Implementations must not retry internally; a failed call is reported
/// immediately and the retry policy, if any, belongs to the caller.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Check an email/password pair
    ///
    /// # Returns
    /// * `Ok(ProviderUser)` - Credentials accepted
    /// * `Err(ProviderError::InvalidCredentials)` - Unknown email or wrong password
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderUser, ProviderError>;

    /// Register a new account
    ///
    /// # Returns
    /// * `Ok(ProviderUser)` - Account created (possibly unconfirmed)
    /// * `Err(ProviderError::AlreadyRegistered)` - Email already in use
    async fn register(&self, email: &str, password: &str) -> Result<ProviderUser, ProviderError>;

    /// Check a one-time passcode sent to the email address
    async fn verify_one_time_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<ProviderUser, ProviderError>;

    /// Look up a user by id
    ///
    /// # Returns
    /// * `Ok(ProviderUser)` - User found
    /// * `Err(ProviderError::NotFound)` - No user with that id
    async fn get_by_id(&self, id: &str) -> Result<ProviderUser, ProviderError>;
}
