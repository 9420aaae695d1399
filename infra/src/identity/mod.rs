//! Identity provider clients
//!
//! - `HttpIdentityProvider`: REST client for a GoTrue-compatible auth API
//! - Response and status mapping onto `ProviderError`

mod http;
mod response;


pub use http::{HttpIdentityProvider, HttpProviderConfig};
pub use response::{classify_status, extract_user, Endpoint, ProviderErrorBody};
