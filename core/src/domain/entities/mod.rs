//! Domain entities representing core business objects.

pub mod identity;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use identity::{Identity, ProviderUser};
pub use token::{AccessClaims, RefreshClaims, TokenClaims, TokenKind, TokenPair, TOKEN_TYPE_BEARER};
