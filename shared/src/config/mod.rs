//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Session token signing secrets and lifetimes
//! - `environment` - Environment detection and logging configuration
//! - `identity` - External identity provider endpoint
//! - `server` - HTTP server binding
//!
//! Every value is read once at startup and is immutable afterwards. Loaders
//! take a lookup function so they can be exercised without touching the
//! process environment.

pub mod auth;
pub mod environment;
pub mod identity;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{JwtConfig, CLOCK_SKEW_SECONDS, DEFAULT_ACCESS_TTL, DEFAULT_REFRESH_TTL};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use identity::{IdentityProviderConfig, ProviderKind};
pub use server::ServerConfig;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Identity provider configuration
    pub identity_provider: IdentityProviderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);
        let jwt = JwtConfig::from_lookup(&lookup);
        jwt.validate(environment)?;

        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(&lookup)?,
            jwt,
            identity_provider: IdentityProviderConfig::from_lookup(&lookup)?,
            logging: LoggingConfig::from_lookup(environment, &lookup),
        })
    }
}
