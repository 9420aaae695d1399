//! Identity entity as seen by the token lifecycle.
//!
//! The identity provider owns and mutates these records; this crate only reads
//! them. `ProviderUser` is the provider-native shape and is translated into
//! `Identity` at the boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of an authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque stable identifier
    pub id: String,

    /// Email address
    pub email: String,

    /// Whether the email address has been confirmed
    pub email_confirmed: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Last successful sign-in
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

/// User record in the identity provider's native format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderUser {
    pub id: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub email_confirmed_at: Option<DateTime<Utc>>,

    /// Older provider versions only report this field
    #[serde(default)]
    pub confirmed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

impl ProviderUser {
    /// Creates a freshly registered, unconfirmed provider record
    pub fn new(id: impl Into<String>, email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            email: Some(email.into()),
            email_confirmed_at: None,
            confirmed_at: None,
            created_at: Some(now),
            updated_at: Some(now),
            last_sign_in_at: None,
        }
    }
}

impl From<ProviderUser> for Identity {
    fn from(user: ProviderUser) -> Self {
        let email_confirmed = user.email_confirmed_at.or(user.confirmed_at).is_some();
        let created_at = user.created_at.unwrap_or_default();

        Self {
            id: user.id,
            email: user.email.unwrap_or_default(),
            email_confirmed,
            created_at,
            updated_at: user.updated_at.unwrap_or(created_at),
            last_sign_in_at: user.last_sign_in_at,
        }
    }
}
