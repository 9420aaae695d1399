//! External collaborators the core depends on through traits.

pub mod identity;

pub use identity::{IdentityProvider, InMemoryIdentityProvider};
