//! GoTrue-compatible identity provider over HTTP
//!
//! Endpoints used, relative to the configured base URL:
//!
//! - `POST /token?grant_type=password` - credential check
//! - `POST /signup` - registration
//! - `POST /verify` - one-time code confirmation
//! - `GET /admin/users/{id}` - lookup by id

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use tf_core::domain::entities::ProviderUser;
use tf_core::errors::ProviderError;
use tf_core::providers::IdentityProvider;
use tf_shared::validation::mask_email;
use tf_shared::IdentityProviderConfig;

use super::response::{classify_status, extract_user, Endpoint, ProviderErrorBody};
use crate::InfrastructureError;

/// HTTP provider client configuration
#[derive(Debug, Clone)]
pub struct HttpProviderConfig {
    /// Base URL of the auth API, without trailing slash
    pub base_url: String,
    /// Key sent as `apikey` and bearer credential
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl HttpProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl TryFrom<&IdentityProviderConfig> for HttpProviderConfig {
    type Error = InfrastructureError;

    fn try_from(config: &IdentityProviderConfig) -> Result<Self, Self::Error> {
        let base_url = config
            .base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                InfrastructureError::Config("IDENTITY_PROVIDER_URL not set".to_string())
            })?;

        let mut http = Self::new(base_url.trim()).with_timeout_secs(config.timeout_secs);
        http.api_key = config.api_key.clone();
        Ok(http)
    }
}

#[derive(Serialize)]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    email: &'a str,
    token: &'a str,
}

/// Identity provider backed by a GoTrue-compatible REST API
pub struct HttpIdentityProvider {
    client: Client,
    config: HttpProviderConfig,
}

impl HttpIdentityProvider {
    /// Create a new client
    pub fn new(config: HttpProviderConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("taskforge-gateway")
            .build()?;

        tracing::info!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "Identity provider client initialized");
        Ok(Self { client, config })
    }

    /// Create from the shared identity provider settings
    pub fn from_config(config: &IdentityProviderConfig) -> Result<Self, InfrastructureError> {
        Self::new(HttpProviderConfig::try_from(config)?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header("apikey", key).bearer_auth(key),
            None => request,
        }
    }

    /// Send a request and turn the response into a user record
    async fn execute(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<ProviderUser, ProviderError> {
        let response = self.authorize(request).send().await.map_err(|e| {
            warn!(endpoint = endpoint.as_str(), error = %e, "Identity provider request failed");
            ProviderError::Unavailable(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let body = ProviderErrorBody::parse(&raw);
            debug!(endpoint = endpoint.as_str(), %status, message = %body.message(), "Identity provider returned error");
            return Err(classify_status(endpoint, status, &body));
        }

        let payload: Value = response.json().await.map_err(|e| {
            ProviderError::Unexpected(format!("{} returned unreadable body: {}", endpoint.as_str(), e))
        })?;
        extract_user(payload)
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderUser, ProviderError> {
        debug!(email = %mask_email(email), "Checking credentials with identity provider");
        let request = self
            .client
            .post(self.url("/token"))
            .query(&[("grant_type", "password")])
            .json(&PasswordCredentials { email, password });
        self.execute(Endpoint::PasswordGrant, request).await
    }

    async fn register(&self, email: &str, password: &str) -> Result<ProviderUser, ProviderError> {
        debug!(email = %mask_email(email), "Registering with identity provider");
        let request = self
            .client
            .post(self.url("/signup"))
            .json(&PasswordCredentials { email, password });
        self.execute(Endpoint::Signup, request).await
    }

    async fn verify_one_time_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<ProviderUser, ProviderError> {
        debug!(email = %mask_email(email), "Verifying one-time code with identity provider");
        let request = self.client.post(self.url("/verify")).json(&VerifyRequest {
            kind: "email",
            email,
            token: code,
        });
        self.execute(Endpoint::Verify, request).await
    }

    async fn get_by_id(&self, id: &str) -> Result<ProviderUser, ProviderError> {
        if id.contains(['/', '?', '#']) {
            return Err(ProviderError::NotFound);
        }
        let request = self.client.get(self.url(&format!("/admin/users/{}", id)));
        self.execute(Endpoint::AdminUser, request).await
    }
}
