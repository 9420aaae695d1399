//! Mapping of provider responses onto core types

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use tf_core::domain::entities::ProviderUser;
use tf_core::errors::ProviderError;

/// Provider endpoint a response came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /token?grant_type=password`
    PasswordGrant,
    /// `POST /signup`
    Signup,
    /// `POST /verify`
    Verify,
    /// `GET /admin/users/{id}`
    AdminUser,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::PasswordGrant => "token",
            Endpoint::Signup => "signup",
            Endpoint::Verify => "verify",
            Endpoint::AdminUser => "admin_user",
        }
    }
}

/// Error body as returned by the provider
///
/// Different provider versions use different field names for the message.
#[derive(Debug, Default, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ProviderErrorBody {
    /// Parse an error body, tolerating non-JSON payloads
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|_| Self {
            message: Some(raw.trim().to_string()).filter(|m| !m.is_empty()),
            ..Default::default()
        })
    }

    /// Most descriptive message available
    pub fn message(&self) -> String {
        self.msg
            .as_ref()
            .or(self.message.as_ref())
            .or(self.error_description.as_ref())
            .or(self.error.as_ref())
            .cloned()
            .unwrap_or_else(|| "no error message".to_string())
    }

    fn mentions_existing_user(&self) -> bool {
        if self.error_code.as_deref() == Some("user_already_exists") {
            return true;
        }
        self.message().to_lowercase().contains("already registered")
    }
}

/// Map a non-success status onto a provider error
pub fn classify_status(endpoint: Endpoint, status: StatusCode, body: &ProviderErrorBody) -> ProviderError {
    if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
        return ProviderError::Unavailable(format!("{} returned {}", endpoint.as_str(), status));
    }

    match (endpoint, status.as_u16()) {
        (Endpoint::PasswordGrant, 400 | 401 | 403 | 404 | 422) => ProviderError::InvalidCredentials,

        (Endpoint::Signup, 400 | 422) if body.mentions_existing_user() => {
            ProviderError::AlreadyRegistered
        }
        (Endpoint::Signup, 400 | 403 | 422) => ProviderError::Rejected(body.message()),

        (Endpoint::Verify, 400 | 401 | 403 | 404 | 410 | 422) => ProviderError::InvalidCode,

        (Endpoint::AdminUser, 400 | 404 | 422) => ProviderError::NotFound,

        _ => ProviderError::Unexpected(format!(
            "{} returned {}: {}",
            endpoint.as_str(),
            status,
            body.message()
        )),
    }
}

/// Pull the user record out of a success payload
///
/// Session responses nest the user under `user`; user endpoints return it at
/// the top level.
pub fn extract_user(payload: Value) -> Result<ProviderUser, ProviderError> {
    let user = match payload {
        Value::Object(mut map) if map.get("user").is_some_and(Value::is_object) => {
            map.remove("user").unwrap_or(Value::Null)
        }
        other => other,
    };

    serde_json::from_value(user)
        .map_err(|e| ProviderError::Unexpected(format!("malformed user payload: {}", e)))
}
