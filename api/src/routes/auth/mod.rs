//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints including:
//! - Sign-in and sign-up with email and password
//! - One-time code confirmation
//! - Token refresh and verification

pub mod refresh;
pub mod sign_in;
pub mod sign_up;
pub mod verify;
pub mod verify_otp;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use tf_core::providers::IdentityProvider;
use tf_core::services::identity::IdentityService;

pub use refresh::refresh;
pub use sign_in::sign_in;
pub use sign_up::sign_up;
pub use verify::verify;
pub use verify_otp::verify_otp;

/// Application state that holds shared services
pub struct AppState<P: IdentityProvider> {
    pub identity: Arc<IdentityService<P>>,
    shutdown: CancellationToken,
}

impl<P: IdentityProvider> AppState<P> {
    /// `shutdown` is cancelled when the server stops; every request works
    /// under a child of it
    pub fn new(identity: Arc<IdentityService<P>>, shutdown: CancellationToken) -> Self {
        Self { identity, shutdown }
    }

    /// Cancellation token for a single request
    pub fn request_token(&self) -> CancellationToken {
        self.shutdown.child_token()
    }
}
