//! Identity provider connection settings

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Which identity provider backend the gateway talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Remote provider reached over HTTP
    #[default]
    Http,
    /// Process-local provider for development and tests
    Memory,
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(ProviderKind::Http),
            "memory" | "in-memory" => Ok(ProviderKind::Memory),
            _ => Err(format!("Invalid identity provider: {}", s)),
        }
    }
}

/// Identity provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentityProviderConfig {
    /// Backend selection
    #[serde(default)]
    pub kind: ProviderKind,

    /// Base URL of the provider's auth API (required for `http`)
    #[serde(default)]
    pub base_url: Option<String>,

    /// API key sent with every provider request
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for IdentityProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            base_url: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl IdentityProviderConfig {
    /// Read the `IDENTITY_PROVIDER*` settings
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = match lookup("IDENTITY_PROVIDER") {
            Some(raw) => raw.parse().map_err(|message| ConfigError::Invalid {
                key: "IDENTITY_PROVIDER",
                message,
            })?,
            None => ProviderKind::default(),
        };
        let base_url = lookup("IDENTITY_PROVIDER_URL").filter(|u| !u.is_empty());
        if kind == ProviderKind::Http && base_url.is_none() {
            return Err(ConfigError::Missing("IDENTITY_PROVIDER_URL"));
        }

        Ok(Self {
            kind,
            base_url,
            api_key: lookup("IDENTITY_PROVIDER_API_KEY"),
            timeout_secs: lookup("IDENTITY_PROVIDER_TIMEOUT_SECS")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_else(default_timeout_secs),
        })
    }
}

fn default_timeout_secs() -> u64 {
    10
}
