//! Unit tests for refresh token rotation

use serde_json::json;

use crate::domain::entities::{AccessClaims, RefreshClaims};
use crate::errors::{AuthError, ErrorCode};

use super::{epoch, forge, identity, peek, service_at, REFRESH_SECRET};

#[test]
fn test_rotate_issues_new_pair() {
    let service = service_at(0);
    let original = service.issue_pair(&identity()).unwrap();

    let rotated = service.rotate(&original.refresh_token).unwrap();
    assert_ne!(rotated.refresh_token, original.refresh_token);
    assert_eq!(rotated.expires_in, 900);

    let result = service.verify(&rotated.access_token);
    assert!(result.valid);
    let subject: RefreshClaims = peek(&original.refresh_token);
    assert_eq!(result.subject.as_deref(), Some(subject.sub.as_str()));
}

#[test]
fn test_rotated_access_token_has_no_email() {
    let service = service_at(0);
    let original = service.issue_pair(&identity()).unwrap();
    let rotated = service.rotate(&original.refresh_token).unwrap();

    let claims: AccessClaims = peek(&rotated.access_token);
    assert!(claims.email.is_none());
    assert!(service.verify(&rotated.access_token).email.is_none());
}

#[test]
fn test_rotated_refresh_token_can_rotate_again() {
    let service = service_at(0);
    let first = service.issue_pair(&identity()).unwrap();
    let second = service.rotate(&first.refresh_token).unwrap();
    let third = service.rotate(&second.refresh_token).unwrap();

    assert_ne!(third.refresh_token, second.refresh_token);
}

#[test]
fn test_old_refresh_token_stays_usable() {
    let service = service_at(0);
    let original = service.issue_pair(&identity()).unwrap();

    service.rotate(&original.refresh_token).unwrap();
    assert!(service.rotate(&original.refresh_token).is_ok());
}

#[test]
fn test_access_token_rejected() {
    let service = service_at(0);
    let pair = service.issue_pair(&identity()).unwrap();

    let err = service.rotate(&pair.access_token).unwrap_err();
    assert_eq!(err, AuthError::InvalidRefreshToken);
    assert_eq!(err.code(), ErrorCode::Unauthenticated);
    assert_eq!(err.reason(), "INVALID_REFRESH_TOKEN");
}

#[test]
fn test_access_kind_signed_with_refresh_key_rejected() {
    let service = service_at(0);
    let now = epoch().timestamp();
    let token = forge(
        json!({ "sub": "u1", "kind": "access", "iat": now, "exp": now + 60 }),
        REFRESH_SECRET,
    );

    assert_eq!(service.rotate(&token), Err(AuthError::InvalidRefreshToken));
}

#[test]
fn test_expired_refresh_token_rejected() {
    let pair = service_at(0).issue_pair(&identity()).unwrap();

    assert!(service_at(604_800 + 15).rotate(&pair.refresh_token).is_ok());
    assert_eq!(
        service_at(604_800 + 16).rotate(&pair.refresh_token),
        Err(AuthError::InvalidRefreshToken)
    );
}

#[test]
fn test_empty_and_garbage_rejected() {
    let service = service_at(0);
    for presented in ["", "   ", "garbage"] {
        assert_eq!(service.rotate(presented), Err(AuthError::InvalidRefreshToken));
    }
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let service = service_at(0);
    let pair = service.issue_pair(&identity()).unwrap();

    assert!(service.rotate(&format!("  {}\n", pair.refresh_token)).is_ok());
}
