//! Session token signing configuration

use serde::{Deserialize, Serialize};

use super::{ConfigError, Environment};

/// Access token lifetime used when `JWT_ACCESS_TTL` is unset
pub const DEFAULT_ACCESS_TTL: &str = "15m";

/// Refresh token lifetime used when `JWT_REFRESH_TTL` is unset
pub const DEFAULT_REFRESH_TTL: &str = "7d";

/// Allowed leeway between signer and verifier clocks, in seconds
pub const CLOCK_SKEW_SECONDS: i64 = 15;

const DEV_ACCESS_SECRET: &str = "dev-access-secret-change-in-production";
const DEV_REFRESH_SECRET: &str = "dev-refresh-secret-change-in-production";

/// JWT signing configuration
///
/// Access and refresh tokens are signed with distinct keys, so knowledge of
/// one secret never allows forging the other kind of token. Lifetimes are kept
/// as human-readable duration strings (`"15m"`, `"7d"`) and parsed by the
/// token service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret for access tokens
    pub access_secret: String,

    /// Secret for refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime
    #[serde(default = "default_access_ttl")]
    pub access_ttl: String,

    /// Refresh token lifetime
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: DEV_ACCESS_SECRET.to_string(),
            refresh_secret: DEV_REFRESH_SECRET.to_string(),
            access_ttl: default_access_ttl(),
            refresh_ttl: default_refresh_ttl(),
        }
    }
}

impl JwtConfig {
    /// Create a configuration with explicit secrets and default lifetimes
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set the access token lifetime string
    pub fn with_access_ttl(mut self, ttl: impl Into<String>) -> Self {
        self.access_ttl = ttl.into();
        self
    }

    /// Set the refresh token lifetime string
    pub fn with_refresh_ttl(mut self, ttl: impl Into<String>) -> Self {
        self.refresh_ttl = ttl.into();
        self
    }

    /// Read the JWT settings, falling back to development defaults
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            access_secret: lookup("JWT_ACCESS_SECRET").unwrap_or(defaults.access_secret),
            refresh_secret: lookup("JWT_REFRESH_SECRET").unwrap_or(defaults.refresh_secret),
            access_ttl: lookup("JWT_ACCESS_TTL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.access_ttl),
            refresh_ttl: lookup("JWT_REFRESH_TTL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.refresh_ttl),
        }
    }

    /// Check if either secret is still the development default
    pub fn is_using_default_secret(&self) -> bool {
        self.access_secret == DEV_ACCESS_SECRET || self.refresh_secret == DEV_REFRESH_SECRET
    }

    /// Validate the secrets for the given environment
    pub fn validate(&self, environment: Environment) -> Result<(), ConfigError> {
        if self.access_secret.is_empty() {
            return Err(ConfigError::Missing("JWT_ACCESS_SECRET"));
        }
        if self.refresh_secret.is_empty() {
            return Err(ConfigError::Missing("JWT_REFRESH_SECRET"));
        }
        if self.access_secret == self.refresh_secret {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_SECRET",
                message: "must differ from JWT_ACCESS_SECRET".to_string(),
            });
        }
        if environment.is_production() && self.is_using_default_secret() {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_SECRET",
                message: "development secrets are not allowed in production".to_string(),
            });
        }
        Ok(())
    }
}

fn default_access_ttl() -> String {
    DEFAULT_ACCESS_TTL.to_string()
}

fn default_refresh_ttl() -> String {
    DEFAULT_REFRESH_TTL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_ttl, "15m");
        assert_eq!(config.refresh_ttl, "7d");
        assert!(config.is_using_default_secret());
        assert!(config.validate(Environment::Development).is_ok());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("a", "b")
            .with_access_ttl("30m")
            .with_refresh_ttl("14d");

        assert_eq!(config.access_ttl, "30m");
        assert_eq!(config.refresh_ttl, "14d");
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_default_secrets_rejected_in_production() {
        let config = JwtConfig::default();
        assert!(config.validate(Environment::Production).is_err());
        assert!(JwtConfig::new("a", "b").validate(Environment::Production).is_ok());
    }

    #[test]
    fn test_empty_secret_rejected() {
        let config = JwtConfig::new("", "b");
        assert_eq!(
            config.validate(Environment::Development),
            Err(ConfigError::Missing("JWT_ACCESS_SECRET"))
        );
    }

    #[test]
    fn test_blank_ttl_falls_back_to_default() {
        let lookup = |key: &str| match key {
            "JWT_ACCESS_TTL" => Some("  ".to_string()),
            "JWT_REFRESH_TTL" => Some("30d".to_string()),
            _ => None,
        };
        let config = JwtConfig::from_lookup(&lookup);
        assert_eq!(config.access_ttl, "15m");
        assert_eq!(config.refresh_ttl, "30d");
    }
}
