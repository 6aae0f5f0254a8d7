//! Repository port for user-owned entities.

use async_trait::async_trait;
use uuid::Uuid;
use wm_shared::types::Pagination;

use crate::domain::ownership::OwnedEntity;
use crate::errors::RepositoryError;

/// Outcome of a repository create.
///
/// Uniqueness violations are part of the port's vocabulary instead of a
/// driver-specific error to catch: callers match on `DuplicateKey` and
/// translate it to their own failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Row inserted; carries the store-assigned identifier
    Created(Uuid),
    /// A unique constraint rejected the insert
    DuplicateKey,
}

impl CreateOutcome {
    /// The assigned identifier, if the insert went through
    pub fn created_id(&self) -> Option<Uuid> {
        match self {
            CreateOutcome::Created(id) => Some(*id),
            CreateOutcome::DuplicateKey => None,
        }
    }
}

/// Persistence contract for entities bound to an owning user.
///
/// Semantics the service layer depends on:
/// - `list_by_owner` pages 1-indexed with offset `(page - 1) * per_page`
///   and a stable order across calls, so pages neither skip nor repeat
///   rows under static data;
/// - `create` assigns the identifier; whatever id the model carries is
///   ignored;
/// - `update` is a full-record replace and reports whether a matching
///   row existed;
/// - `find_by_id` is unscoped: ownership is the service's concern.
#[async_trait]
pub trait OwnedRepository<T: OwnedEntity>: Send + Sync {
    /// Fetch a single entity by id, regardless of owner
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepositoryError>;

    /// Fetch one page of the entities belonging to `owner_id`
    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        pagination: Pagination,
    ) -> Result<Vec<T>, RepositoryError>;

    /// Insert a new entity; the store assigns the identifier
    async fn create(&self, model: &T) -> Result<CreateOutcome, RepositoryError>;

    /// Replace all fields of the entity matching `model.id()`
    async fn update(&self, model: &T) -> Result<bool, RepositoryError>;

    /// Delete the entity with the given id
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepositoryError>;
}


#[cfg(test)]
mod tests {
    use super::mock::MockOwnedRepository;
    use super::*;
    use crate::domain::entities::Aircraft;

    #[tokio::test]
    async fn test_mock_create_assigns_id() {
        let repo = MockOwnedRepository::<Aircraft>::new();
        let aircraft = Aircraft::new("PP-ABC", "C172");

        let outcome = repo.create(&aircraft).await.unwrap();
        let id = outcome.created_id().expect("insert should go through");

        let stored = repo.stored(id).await.unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.registration, "PP-ABC");
    }

    #[tokio::test]
    async fn test_mock_list_pages_without_overlap() {
        let repo = MockOwnedRepository::<Aircraft>::new();
        let owner = Uuid::new_v4();

        for n in 0..5 {
            let mut aircraft = Aircraft::new(format!("PP-{:03}", n), "C172");
            aircraft.set_owner_id(owner);
            repo.create(&aircraft).await.unwrap();
        }

        let first = repo
            .list_by_owner(owner, Pagination::new(1, 2))
            .await
            .unwrap();
        let second = repo
            .list_by_owner(owner, Pagination::new(2, 2))
            .await
            .unwrap();
        let third = repo
            .list_by_owner(owner, Pagination::new(3, 2))
            .await
            .unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        assert_eq!(third.len(), 1);

        let mut ids: Vec<Uuid> = first
            .iter()
            .chain(second.iter())
            .chain(third.iter())
            .map(|a| a.id)
            .collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn test_mock_update_reports_missing_row() {
        let repo = MockOwnedRepository::<Aircraft>::new();
        let mut aircraft = Aircraft::new("PP-ABC", "C172");
        aircraft.set_id(Uuid::new_v4());

        assert!(!repo.update(&aircraft).await.unwrap());
    }
}
