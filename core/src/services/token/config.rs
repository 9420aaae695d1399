//! Configuration for the token service

use tf_shared::config::{JwtConfig, CLOCK_SKEW_SECONDS};
use tf_shared::ConfigError;

use super::ttl::parse_ttl;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 secret for access tokens
    pub access_secret: String,
    /// HS256 secret for refresh tokens
    pub refresh_secret: String,
    /// Access token lifetime, e.g. `"15m"`
    pub access_ttl: String,
    /// Refresh token lifetime, e.g. `"7d"`
    pub refresh_ttl: String,
    /// Leeway applied to `exp` when verifying
    pub clock_skew_seconds: i64,
}

impl TokenServiceConfig {
    /// Create a configuration with explicit secrets and default lifetimes
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self::from(&JwtConfig::new(access_secret, refresh_secret))
    }

    /// Reject configurations that would let one token kind pass for the other
    pub fn validate(&self) -> Result<(), ConfigError> {
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
        Ok(())
    }

    /// Access token lifetime in seconds
    pub fn access_ttl_seconds(&self) -> i64 {
        parse_ttl(Some(&self.access_ttl))
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_ttl_seconds(&self) -> i64 {
        parse_ttl(Some(&self.refresh_ttl))
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            access_secret: jwt.access_secret.clone(),
            refresh_secret: jwt.refresh_secret.clone(),
            access_ttl: jwt.access_ttl.clone(),
            refresh_ttl: jwt.refresh_ttl.clone(),
            clock_skew_seconds: CLOCK_SKEW_SECONDS,
        }
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}
