//! Session token lifecycle
//!
//! - Lifetime parsing for duration strings
//! - Signing of access and refresh tokens with separate keys
//! - Total verification of presented access tokens
//! - Stateless refresh token rotation

mod clock;
mod config;
mod issuer;
mod keys;
mod rotator;
mod service;
mod ttl;
mod verifier;

#[cfg(test)]
mod tests;

pub use clock::{Clock, SystemClock};
pub use config::TokenServiceConfig;
pub use issuer::TokenIssuer;
pub use keys::{read_kind_hint, DecodedClaims, SigningKeys};
pub use rotator::RefreshRotator;
pub use service::TokenService;
pub use ttl::{parse_ttl, FALLBACK_TTL_SECONDS};
pub use verifier::{extract_token, TokenVerifier};
