//! Shared utilities and common types for the Taskforge server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types, loaded once at process start
//! - Error response envelope shared by every HTTP surface
//! - Utility functions (email validation and masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, Environment, IdentityProviderConfig, JwtConfig, LogFormat,
    LoggingConfig, ProviderKind, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::validation;
