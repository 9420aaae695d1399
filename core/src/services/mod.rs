//! Business services containing domain logic and use cases.

pub mod identity;
pub mod token;

// Re-export commonly used types
pub use identity::IdentityService;
pub use token::{
    parse_ttl, Clock, SystemClock, TokenIssuer, TokenService, TokenServiceConfig, TokenVerifier,
};
