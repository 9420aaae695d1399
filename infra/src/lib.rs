//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators `tf_core` talks to through
//! traits. Currently this is the HTTP client for a GoTrue-style identity
//! provider.

pub mod identity;

pub use identity::{HttpIdentityProvider, HttpProviderConfig};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
