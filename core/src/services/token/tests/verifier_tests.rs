//! Unit tests for access token verification

use serde_json::json;

use crate::domain::value_objects::VerifyFailure;
use crate::services::token::extract_token;

use super::{epoch, forge, identity, service_at, ACCESS_SECRET, REFRESH_SECRET};

#[test]
fn test_valid_access_token() {
    let service = service_at(0);
    let pair = service.issue_pair(&identity()).unwrap();

    let result = service.verify(&pair.access_token);
    assert!(result.valid);
    assert_eq!(result.subject.as_deref(), Some(identity().id.as_str()));
    assert_eq!(result.email.as_deref(), Some("user@example.com"));
    assert_eq!(result.reason(), "");
}

#[test]
fn test_expiry_honours_skew() {
    let pair = service_at(0).issue_pair(&identity()).unwrap();

    assert!(service_at(899).verify(&pair.access_token).valid);
    // within the 15 second tolerance
    assert!(service_at(915).verify(&pair.access_token).valid);

    let expired = service_at(916).verify(&pair.access_token);
    assert!(!expired.valid);
    assert_eq!(expired.failure, Some(VerifyFailure::TokenExpired));
    assert_eq!(expired.reason(), "TOKEN_EXPIRED");
    assert!(expired.subject.is_none());
}

#[test]
fn test_bearer_prefix_variants() {
    let service = service_at(0);
    let token = service.issue_pair(&identity()).unwrap().access_token;

    let bare = service.verify(&token);
    let upper = service.verify(&format!("Bearer {}", token));
    let lower = service.verify(&format!("bearer {}", token));
    let padded = service.verify(&format!("  BEARER   {}  ", token));

    assert!(bare.valid);
    assert_eq!(bare, upper);
    assert_eq!(bare, lower);
    assert_eq!(bare, padded);
}

#[test]
fn test_empty_input() {
    let service = service_at(0);
    for presented in ["", "   ", "Bearer ", "bearer    "] {
        let result = service.verify(presented);
        assert!(!result.valid);
        assert_eq!(result.reason(), "INVALID_TOKEN");
    }
}

#[test]
fn test_extract_token() {
    assert_eq!(extract_token("Bearer abc"), Some("abc"));
    assert_eq!(extract_token(" abc "), Some("abc"));
    assert_eq!(extract_token("Bearer"), Some("Bearer"));
    assert_eq!(extract_token("  "), None);
}

#[test]
fn test_garbage_is_invalid_token() {
    let service = service_at(0);
    for presented in ["not-a-jwt", "a.b.c", "Bearer \u{1F600}"] {
        assert_eq!(service.verify(presented).reason(), "INVALID_TOKEN");
    }
}

#[test]
fn test_refresh_token_is_wrong_type() {
    let service = service_at(0);
    let pair = service.issue_pair(&identity()).unwrap();

    let result = service.verify(&pair.refresh_token);
    assert!(!result.valid);
    assert_eq!(result.reason(), "INVALID_TOKEN_TYPE");

    let result = service.verify(&format!("Bearer {}", pair.refresh_token));
    assert_eq!(result.reason(), "INVALID_TOKEN_TYPE");
}

#[test]
fn test_refresh_kind_with_any_signature_is_wrong_type() {
    let service = service_at(0);
    let now = epoch().timestamp();
    let claims = json!({ "sub": "u1", "kind": "refresh", "iat": now, "exp": now + 60 });

    for secret in [ACCESS_SECRET, REFRESH_SECRET, "attacker-secret"] {
        let token = forge(claims.clone(), secret);
        let result = service.verify(&token);
        assert!(!result.valid);
        assert_eq!(result.reason(), "INVALID_TOKEN_TYPE");
    }
}

#[test]
fn test_missing_kind_is_wrong_type() {
    let service = service_at(0);
    let now = epoch().timestamp();
    let token = forge(json!({ "sub": "u1", "iat": now, "exp": now + 60 }), ACCESS_SECRET);

    assert_eq!(service.verify(&token).reason(), "INVALID_TOKEN_TYPE");
}

#[test]
fn test_forged_access_token_is_invalid() {
    let service = service_at(0);
    let now = epoch().timestamp();
    let token = forge(
        json!({ "sub": "u1", "kind": "access", "iat": now, "exp": now + 60 }),
        "attacker-secret",
    );

    assert_eq!(service.verify(&token).reason(), "INVALID_TOKEN");
}

#[test]
fn test_missing_subject_is_invalid() {
    let service = service_at(0);
    let now = epoch().timestamp();
    let token = forge(json!({ "kind": "access", "exp": now + 60 }), ACCESS_SECRET);

    assert_eq!(service.verify(&token).reason(), "INVALID_TOKEN");
}
