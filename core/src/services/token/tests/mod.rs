mod rotator_tests;
mod ttl_tests;
mod verifier_tests;

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;

use crate::domain::entities::Identity;

use super::{Clock, TokenService, TokenServiceConfig};

const ACCESS_SECRET: &str = "test-access-secret";
const REFRESH_SECRET: &str = "test-refresh-secret";

/// Clock frozen at a given instant
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

fn config() -> TokenServiceConfig {
    TokenServiceConfig::new(ACCESS_SECRET, REFRESH_SECRET)
}

/// Token service whose clock reads `epoch() + offset_seconds`
fn service_at(offset_seconds: i64) -> TokenService {
    let now = epoch() + Duration::seconds(offset_seconds);
    TokenService::with_clock(config(), Arc::new(FixedClock(now))).unwrap()
}

fn identity() -> Identity {
    Identity {
        id: "0b8e6a52-7d0a-4f5e-9a6e-2f1c3d4e5f60".to_string(),
        email: "user@example.com".to_string(),
        email_confirmed: true,
        created_at: epoch(),
        updated_at: epoch(),
        last_sign_in_at: None,
    }
}

/// Decode claims without checking signature or expiry
fn peek<C: DeserializeOwned>(token: &str) -> C {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    decode::<C>(token, &DecodingKey::from_secret(&[]), &validation)
        .unwrap()
        .claims
}

/// Sign arbitrary JSON claims with an arbitrary secret
fn forge(claims: serde_json::Value, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}
