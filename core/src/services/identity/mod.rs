//! Identity flows module
//!
//! Sign-in, sign-up, one-time code confirmation and user lookup against an
//! external identity provider, with session tokens issued on success.

mod service;

#[cfg(test)]
mod tests;

pub use service::IdentityService;
