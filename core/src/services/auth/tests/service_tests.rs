use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::value_objects::{LoginRequest, RefreshRequest, SignUpRequest};
use crate::errors::FailureCategory;
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::AuthService;
use crate::services::password::mock::PlaintextPasswordHasher;
use crate::services::token::{TokenService, TokenServiceConfig};

type TestAuthService = AuthService<MockUserRepository, PlaintextPasswordHasher>;

fn service() -> (TestAuthService, Arc<MockUserRepository>) {
    let repository = Arc::new(MockUserRepository::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        secret: "test-secret-key-for-unit-tests".to_string(),
        ..Default::default()
    }));

    (
        AuthService::new(
            repository.clone(),
            Arc::new(PlaintextPasswordHasher),
            token_service,
        ),
        repository,
    )
}

fn sign_up_request() -> SignUpRequest {
    SignUpRequest::new("pilot@example.com", "Pw1!aaaa", "Pw1!aaaa")
}

async fn signed_up_user_id(repository: &MockUserRepository) -> Uuid {
    repository
        .find_by_email("pilot@example.com")
        .await
        .unwrap()
        .expect("user should exist")
        .id
}

#[tokio::test]
async fn test_sign_up_persists_hashed_credentials() {
    let (service, repository) = service();

    service.sign_up(sign_up_request()).await.unwrap();

    let user = repository
        .find_by_email("pilot@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.email, "pilot@example.com");
    assert_ne!(user.password_hash.as_deref(), Some("Pw1!aaaa"));
    assert!(user.refresh_token.is_none());
    assert!(user.refresh_token_expires_at.is_none());
}

#[tokio::test]
async fn test_sign_up_normalizes_email_case() {
    let (service, repository) = service();

    let request = SignUpRequest::new("Pilot@Example.COM", "Pw1!aaaa", "Pw1!aaaa");
    service.sign_up(request).await.unwrap();

    assert!(repository
        .find_by_email("pilot@example.com")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_duplicate_sign_up_is_conflict_and_mutates_nothing() {
    let (service, repository) = service();

    service.sign_up(sign_up_request()).await.unwrap();
    let original = repository
        .find_by_email("pilot@example.com")
        .await
        .unwrap()
        .unwrap();

    let result = service
        .sign_up(SignUpRequest::new("pilot@example.com", "Pw2!bbbb", "Pw2!bbbb"))
        .await;

    let failure = result.unwrap_err().failure().cloned().unwrap();
    assert_eq!(failure.category, FailureCategory::Conflict);
    assert_eq!(failure.title, "Failed to create new user.");
    assert_eq!(failure.detail, "Email address already used.");

    // The original account is untouched
    let stored = repository
        .find_by_email("pilot@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, original);
}

#[tokio::test]
async fn test_login_issues_pair_and_persists_refresh_state() {
    let (service, repository) = service();
    service.sign_up(sign_up_request()).await.unwrap();

    let pair = service
        .login(LoginRequest::new("pilot@example.com", "Pw1!aaaa"))
        .await
        .unwrap();

    let user = repository.stored(pair.user_id).await.unwrap();
    assert_eq!(user.refresh_token.as_deref(), Some(pair.refresh_token.as_str()));
    assert!(user.refresh_token_expires_at.unwrap() > Utc::now());
    assert!(!pair.access_token.is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (service, _) = service();
    service.sign_up(sign_up_request()).await.unwrap();

    let unknown_email = service
        .login(LoginRequest::new("ghost@example.com", "Pw1!aaaa"))
        .await
        .unwrap_err();
    let wrong_password = service
        .login(LoginRequest::new("pilot@example.com", "Wrong!123"))
        .await
        .unwrap_err();

    let first = unknown_email.failure().cloned().unwrap();
    let second = wrong_password.failure().cloned().unwrap();

    // Byte-identical category, title and detail: no account enumeration
    assert_eq!(first, second);
    assert_eq!(first.category, FailureCategory::Unauthorized);
    assert_eq!(first.title, "Login failed.");
    assert_eq!(first.detail, "Email or password wrong.");
}

#[tokio::test]
async fn test_refresh_for_unknown_user_is_not_found() {
    let (service, _) = service();

    let result = service
        .refresh(RefreshRequest::new(Uuid::new_v4(), "whatever"))
        .await;
    assert_eq!(
        result.unwrap_err().category(),
        Some(FailureCategory::NotFound)
    );
}

#[tokio::test]
async fn test_refresh_with_mismatched_token_is_bad_request() {
    let (service, repository) = service();
    service.sign_up(sign_up_request()).await.unwrap();
    let user_id = signed_up_user_id(&repository).await;

    service
        .login(LoginRequest::new("pilot@example.com", "Pw1!aaaa"))
        .await
        .unwrap();

    let result = service
        .refresh(RefreshRequest::new(user_id, "not-the-stored-token"))
        .await;

    let failure = result.unwrap_err().failure().cloned().unwrap();
    assert_eq!(failure.category, FailureCategory::BadRequest);
    assert_eq!(failure.detail, "Invalid Refresh Token.");
}

#[tokio::test]
async fn test_refresh_with_expired_token_clears_state() {
    let (service, repository) = service();
    service.sign_up(sign_up_request()).await.unwrap();
    let user_id = signed_up_user_id(&repository).await;

    // Seed a matching but expired refresh token
    repository
        .update_refresh_state(
            user_id,
            Some("expired-token"),
            Some(Utc::now() - Duration::seconds(1)),
        )
        .await
        .unwrap();

    let result = service
        .refresh(RefreshRequest::new(user_id, "expired-token"))
        .await;
    let failure = result.unwrap_err().failure().cloned().unwrap();
    assert_eq!(failure.category, FailureCategory::Unauthorized);
    assert_eq!(
        failure.detail,
        "Refresh Token is expired. A new login is necessary."
    );

    // Side effect: the stored state is gone...
    let user = repository.stored(user_id).await.unwrap();
    assert!(user.refresh_token.is_none());
    assert!(user.refresh_token_expires_at.is_none());

    // ...so the same token now fails the match instead
    let result = service
        .refresh(RefreshRequest::new(user_id, "expired-token"))
        .await;
    assert_eq!(
        result.unwrap_err().category(),
        Some(FailureCategory::BadRequest)
    );
}

#[tokio::test]
async fn test_refresh_rotates_the_stored_token() {
    let (service, repository) = service();
    service.sign_up(sign_up_request()).await.unwrap();

    let first_pair = service
        .login(LoginRequest::new("pilot@example.com", "Pw1!aaaa"))
        .await
        .unwrap();

    let second_pair = service
        .refresh(RefreshRequest::new(
            first_pair.user_id,
            first_pair.refresh_token.clone(),
        ))
        .await
        .unwrap();

    assert_ne!(first_pair.refresh_token, second_pair.refresh_token);

    let user = repository.stored(first_pair.user_id).await.unwrap();
    assert_eq!(
        user.refresh_token.as_deref(),
        Some(second_pair.refresh_token.as_str())
    );

    // The rotated-out token is permanently invalid
    let result = service
        .refresh(RefreshRequest::new(
            first_pair.user_id,
            first_pair.refresh_token,
        ))
        .await;
    assert_eq!(
        result.unwrap_err().category(),
        Some(FailureCategory::BadRequest)
    );
}

#[tokio::test]
async fn test_logout_clears_state_and_is_idempotent() {
    let (service, repository) = service();
    service.sign_up(sign_up_request()).await.unwrap();

    let pair = service
        .login(LoginRequest::new("pilot@example.com", "Pw1!aaaa"))
        .await
        .unwrap();

    service.logout(pair.user_id).await.unwrap();
    let user = repository.stored(pair.user_id).await.unwrap();
    assert!(user.refresh_token.is_none());

    // A second logout is not an error
    service.logout(pair.user_id).await.unwrap();

    // The cleared token no longer matches
    let result = service
        .refresh(RefreshRequest::new(pair.user_id, pair.refresh_token))
        .await;
    assert_eq!(
        result.unwrap_err().category(),
        Some(FailureCategory::BadRequest)
    );
}
