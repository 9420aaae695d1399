//! In-memory identity provider for local development and tests

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::ProviderUser;
use crate::errors::ProviderError;

use super::trait_::IdentityProvider;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone)]
struct Account {
    user: ProviderUser,
    password: String,
    pending_code: Option<String>,
}

/// Process-local identity provider
///
/// Accounts live in a map keyed by email. Registration creates an unconfirmed
/// account with a pending one-time code; verifying that code confirms the
/// email. Pending codes go to the debug log since nothing delivers them.
/// Not meant for production: passwords are held as given.
pub struct InMemoryIdentityProvider {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    unavailable: AtomicBool,
}

impl InMemoryIdentityProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Seed an account, returning its provider record
    pub async fn insert_user(&self, email: &str, password: &str, confirmed: bool) -> ProviderUser {
        let now = Utc::now();
        let mut user = ProviderUser::new(Uuid::new_v4().to_string(), email, now);
        if confirmed {
            user.email_confirmed_at = Some(now);
        }

        let account = Account {
            user: user.clone(),
            password: password.to_string(),
            pending_code: None,
        };
        self.accounts.write().await.insert(email.to_string(), account);
        user
    }

    /// Generate a fresh one-time code for an existing account
    pub async fn issue_code(&self, email: &str) -> Option<String> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(email)?;
        let code = generate_code();
        tracing::debug!(user_id = %account.user.id, code = %code, "Issued in-memory one-time code");
        account.pending_code = Some(code.clone());
        Some(code)
    }

    /// Currently pending one-time code for an account
    pub async fn pending_code(&self, email: &str) -> Option<String> {
        let accounts = self.accounts.read().await;
        accounts.get(email).and_then(|a| a.pending_code.clone())
    }

    /// Simulate an outage: every call fails with `ProviderError::Unavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), ProviderError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ProviderError::Unavailable(
                "in-memory provider marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_code() -> String {
    format!("{:06}", Uuid::new_v4().as_u128() % 1_000_000)
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderUser, ProviderError> {
        self.check_available()?;
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(email)
            .filter(|a| a.password == password)
            .ok_or(ProviderError::InvalidCredentials)?;

        let now = Utc::now();
        account.user.last_sign_in_at = Some(now);
        account.user.updated_at = Some(now);
        Ok(account.user.clone())
    }

    async fn register(&self, email: &str, password: &str) -> Result<ProviderUser, ProviderError> {
        self.check_available()?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ProviderError::Rejected(format!(
                "Password should be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email) {
            return Err(ProviderError::AlreadyRegistered);
        }

        let user = ProviderUser::new(Uuid::new_v4().to_string(), email, Utc::now());
        let code = generate_code();
        tracing::debug!(
            user_id = %user.id,
            code = %code,
            "Registered in-memory account with pending code"
        );
        accounts.insert(
            email.to_string(),
            Account {
                user: user.clone(),
                password: password.to_string(),
                pending_code: Some(code),
            },
        );
        Ok(user)
    }

    async fn verify_one_time_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<ProviderUser, ProviderError> {
        self.check_available()?;
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(email)
            .filter(|a| a.pending_code.as_deref() == Some(code))
            .ok_or(ProviderError::InvalidCode)?;

        let now = Utc::now();
        account.pending_code = None;
        account.user.email_confirmed_at.get_or_insert(now);
        account.user.last_sign_in_at = Some(now);
        account.user.updated_at = Some(now);
        Ok(account.user.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<ProviderUser, ProviderError> {
        self.check_available()?;
        let accounts = self.accounts.read().await;
        accounts
            .values()
            .find(|a| a.user.id == id)
            .map(|a| a.user.clone())
            .ok_or(ProviderError::NotFound)
    }
}
