//! Unit tests for identity translation

use chrono::{TimeZone, Utc};

use crate::domain::entities::identity::{Identity, ProviderUser};

#[test]
fn test_identity_from_provider_user() {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let confirmed = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let user = ProviderUser {
        id: "b7d6".to_string(),
        email: Some("user@example.com".to_string()),
        email_confirmed_at: Some(confirmed),
        confirmed_at: None,
        created_at: Some(created),
        updated_at: Some(confirmed),
        last_sign_in_at: Some(confirmed),
    };

    let identity = Identity::from(user);
    assert_eq!(identity.id, "b7d6");
    assert_eq!(identity.email, "user@example.com");
    assert!(identity.email_confirmed);
    assert_eq!(identity.created_at, created);
    assert_eq!(identity.updated_at, confirmed);
    assert_eq!(identity.last_sign_in_at, Some(confirmed));
}

#[test]
fn test_legacy_confirmed_at_counts_as_confirmed() {
    let now = Utc::now();
    let mut user = ProviderUser::new("id", "user@example.com", now);
    user.confirmed_at = Some(now);

    assert!(Identity::from(user).email_confirmed);
}

#[test]
fn test_missing_fields_fall_back() {
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let user = ProviderUser {
        id: "id".to_string(),
        email: None,
        email_confirmed_at: None,
        confirmed_at: None,
        created_at: Some(created),
        updated_at: None,
        last_sign_in_at: None,
    };

    let identity = Identity::from(user);
    assert_eq!(identity.email, "");
    assert!(!identity.email_confirmed);
    assert_eq!(identity.updated_at, created);
    assert!(identity.last_sign_in_at.is_none());
}

#[test]
fn test_provider_user_deserializes_native_payload() {
    let payload = r#"{
        "id": "8f2e",
        "aud": "authenticated",
        "email": "user@example.com",
        "email_confirmed_at": "2024-02-01T10:00:00Z",
        "created_at": "2024-01-01T10:00:00Z",
        "updated_at": "2024-02-01T10:00:00Z",
        "last_sign_in_at": null
    }"#;

    let user: ProviderUser = serde_json::from_str(payload).unwrap();
    assert_eq!(user.id, "8f2e");
    assert!(user.email_confirmed_at.is_some());
    assert!(user.last_sign_in_at.is_none());
}
