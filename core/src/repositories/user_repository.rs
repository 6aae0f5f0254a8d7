//! Repository port for user accounts and their credential state.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::RepositoryError;
use crate::repositories::owned_repository::CreateOutcome;

/// Persistence contract for user accounts.
///
/// `update_refresh_state` persists ONLY the refresh token and its expiry,
/// keyed by user id. Keeping the write that narrow means a concurrent
/// profile edit can never be clobbered by a login.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Fetch a user by email; the stored email is lowercase, so the
    /// lookup expects a normalized value
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Insert a new user; a duplicate email reports `DuplicateKey` and
    /// leaves existing rows untouched
    async fn create(&self, user: &User) -> Result<CreateOutcome, RepositoryError>;

    /// Persist the refresh token and expiry for `user_id`, touching no
    /// other column. `None` clears the stored state.
    async fn update_refresh_state(
        &self,
        user_id: Uuid,
        refresh_token: Option<&str>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), RepositoryError>;
}


#[cfg(test)]
mod tests {
    use super::mock::MockUserRepository;
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_mock_create_and_find_by_email() {
        let repo = MockUserRepository::new();
        let user = User::new("pilot@example.com", "hash");

        let outcome = repo.create(&user).await.unwrap();
        let id = outcome.created_id().expect("insert should go through");

        let found = repo.find_by_email("pilot@example.com").await.unwrap();
        assert_eq!(found.unwrap().id, id);
    }

    #[tokio::test]
    async fn test_mock_duplicate_email() {
        let repo = MockUserRepository::new();
        repo.create(&User::new("pilot@example.com", "hash-one"))
            .await
            .unwrap();

        let outcome = repo
            .create(&User::new("pilot@example.com", "hash-two"))
            .await
            .unwrap();
        assert_eq!(outcome, CreateOutcome::DuplicateKey);
    }

    #[tokio::test]
    async fn test_mock_update_refresh_state_touches_only_refresh_columns() {
        let repo = MockUserRepository::new();
        let id = repo
            .create(&User::new("pilot@example.com", "hash"))
            .await
            .unwrap()
            .created_id()
            .unwrap();

        let expires_at = Utc::now() + Duration::days(7);
        repo.update_refresh_state(id, Some("opaque"), Some(expires_at))
            .await
            .unwrap();

        let stored = repo.stored(id).await.unwrap();
        assert_eq!(stored.refresh_token.as_deref(), Some("opaque"));
        assert_eq!(stored.refresh_token_expires_at, Some(expires_at));
        assert_eq!(stored.password_hash.as_deref(), Some("hash"));

        repo.update_refresh_state(id, None, None).await.unwrap();
        let stored = repo.stored(id).await.unwrap();
        assert!(stored.refresh_token.is_none());
    }
}
