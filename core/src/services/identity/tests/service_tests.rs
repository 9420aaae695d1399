//! Unit tests for the identity flows

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::domain::entities::TOKEN_TYPE_BEARER;
use crate::errors::{AuthError, ErrorCode};
use crate::providers::InMemoryIdentityProvider;
use crate::services::identity::IdentityService;
use crate::services::token::{TokenService, TokenServiceConfig};

const EMAIL: &str = "user@example.com";

async fn setup() -> (IdentityService<InMemoryIdentityProvider>, Arc<InMemoryIdentityProvider>, String) {
    let provider = Arc::new(InMemoryIdentityProvider::new());
    let user = provider.insert_user(EMAIL, "correct", true).await;
    let tokens = Arc::new(
        TokenService::new(TokenServiceConfig::new("access-secret", "refresh-secret")).unwrap(),
    );
    (IdentityService::new(provider.clone(), tokens), provider, user.id)
}

#[tokio::test]
async fn test_sign_in_end_to_end() {
    let (service, _, user_id) = setup().await;
    let cancel = CancellationToken::new();

    let pair = service.sign_in(EMAIL, "correct", &cancel).await.unwrap();
    assert_eq!(pair.token_type, TOKEN_TYPE_BEARER);
    assert_eq!(pair.expires_in, 900);

    let result = service.verify(&pair.access_token);
    assert!(result.valid);
    assert_eq!(result.subject, Some(user_id));
    assert_eq!(result.email.as_deref(), Some(EMAIL));
}

#[tokio::test]
async fn test_sign_in_normalizes_email() {
    let (service, _, _) = setup().await;
    let cancel = CancellationToken::new();

    assert!(service.sign_in("  User@Example.COM ", "correct", &cancel).await.is_ok());
}

#[tokio::test]
async fn test_sign_in_wrong_password() {
    let (service, _, _) = setup().await;
    let cancel = CancellationToken::new();

    let err = service.sign_in(EMAIL, "wrong", &cancel).await.unwrap_err();
    assert_eq!(err, AuthError::WrongCredentials);
    assert_eq!(err.code(), ErrorCode::Unauthenticated);
    assert_eq!(err.reason(), "WRONG_CREDENTIALS");
}

#[tokio::test]
async fn test_sign_in_empty_credentials() {
    let (service, _, _) = setup().await;
    let cancel = CancellationToken::new();

    assert_eq!(
        service.sign_in("", "correct", &cancel).await,
        Err(AuthError::WrongCredentials)
    );
    assert_eq!(
        service.sign_in(EMAIL, "", &cancel).await,
        Err(AuthError::WrongCredentials)
    );
}

#[tokio::test]
async fn test_sign_in_provider_outage_is_wrong_credentials() {
    let (service, provider, _) = setup().await;
    provider.set_unavailable(true);

    let result = service.sign_in(EMAIL, "correct", &CancellationToken::new()).await;
    assert_eq!(result, Err(AuthError::WrongCredentials));
}

#[tokio::test]
async fn test_cancelled_sign_in_issues_nothing() {
    let (service, _, _) = setup().await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = service.sign_in(EMAIL, "correct", &cancel).await.unwrap_err();
    assert_eq!(err, AuthError::Cancelled);
    assert_eq!(err.code(), ErrorCode::Internal);
    assert_eq!(err.reason(), "REQUEST_CANCELLED");
}

#[tokio::test]
async fn test_sign_up_then_verify_otp() {
    let (service, provider, _) = setup().await;
    let cancel = CancellationToken::new();

    assert_eq!(service.sign_up("New@Example.com", "secret123", &cancel).await, Ok(true));

    let code = provider.pending_code("new@example.com").await.unwrap();
    let pair = service
        .verify_otp("new@example.com", &code, &cancel)
        .await
        .unwrap();
    assert!(service.verify(&pair.access_token).valid);

    let identity = service
        .get_user(&service.verify(&pair.access_token).subject.unwrap(), &cancel)
        .await
        .unwrap();
    assert!(identity.email_confirmed);
}

#[tokio::test]
async fn test_sign_up_failures() {
    let (service, _, _) = setup().await;
    let cancel = CancellationToken::new();

    let duplicate = service.sign_up(EMAIL, "secret123", &cancel).await.unwrap_err();
    assert_eq!(duplicate, AuthError::SignUpFailed);
    assert_eq!(duplicate.code(), ErrorCode::InvalidArgument);

    let weak = service.sign_up("weak@example.com", "abc", &cancel).await;
    assert_eq!(weak, Err(AuthError::SignUpFailed));
}

#[tokio::test]
async fn test_sign_up_rejects_malformed_email() {
    let (service, provider, _) = setup().await;
    let cancel = CancellationToken::new();

    let result = service.sign_up("not-an-email", "secret123", &cancel).await;
    assert_eq!(result, Err(AuthError::SignUpFailed));
    assert_eq!(provider.pending_code("not-an-email").await, None);
}

#[tokio::test]
async fn test_verify_otp_failures() {
    let (service, provider, _) = setup().await;
    let cancel = CancellationToken::new();

    let wrong = service.verify_otp(EMAIL, "000000x", &cancel).await;
    assert_eq!(wrong, Err(AuthError::InvalidOtp));

    let empty = service.verify_otp(EMAIL, "  ", &cancel).await;
    assert_eq!(empty, Err(AuthError::InvalidOtp));

    provider.issue_code(EMAIL).await.unwrap();
    provider.set_unavailable(true);
    let outage = service.verify_otp(EMAIL, "123456", &cancel).await.unwrap_err();
    assert_eq!(outage, AuthError::OtpVerificationError);
    assert_eq!(outage.code(), ErrorCode::Internal);
}

#[tokio::test]
async fn test_get_user() {
    let (service, _, user_id) = setup().await;
    let cancel = CancellationToken::new();

    let identity = service.get_user(&user_id, &cancel).await.unwrap();
    assert_eq!(identity.id, user_id);
    assert_eq!(identity.email, EMAIL);
    assert!(identity.email_confirmed);

    let missing = service.get_user("unknown-id", &cancel).await.unwrap_err();
    assert_eq!(missing, AuthError::UserNotFound);
    assert_eq!(missing.code(), ErrorCode::NotFound);

    assert_eq!(service.get_user("   ", &cancel).await, Err(AuthError::UserNotFound));
}

#[tokio::test]
async fn test_cancelled_get_user() {
    let (service, _, user_id) = setup().await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    assert_eq!(service.get_user(&user_id, &cancel).await, Err(AuthError::Cancelled));
}

#[tokio::test]
async fn test_refresh_after_sign_in() {
    let (service, _, user_id) = setup().await;
    let cancel = CancellationToken::new();
    let pair = service.sign_in(EMAIL, "correct", &cancel).await.unwrap();

    let rotated = service.refresh(&pair.refresh_token).unwrap();
    assert_ne!(rotated.refresh_token, pair.refresh_token);
    assert_eq!(service.verify(&rotated.access_token).subject, Some(user_id));

    assert_eq!(
        service.refresh(&pair.access_token),
        Err(AuthError::InvalidRefreshToken)
    );
}
