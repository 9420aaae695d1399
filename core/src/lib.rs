//! # Taskforge Core
//!
//! Core business logic for the Taskforge identity service.
//! This crate contains the identity and token domain types, the session token
//! lifecycle (issue, verify, rotate), the identity flows that orchestrate an
//! external identity provider, and the canonical error taxonomy.

pub mod domain;
pub mod errors;
pub mod providers;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use providers::*;
pub use services::*;
