//! Value objects representing immutable domain concepts.

pub mod verify_result;

// Re-export commonly used types
pub use verify_result::{VerifyFailure, VerifyResult};
