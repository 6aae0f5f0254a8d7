//! Generic CRUD orchestration for user-owned entities

use std::marker::PhantomData;
use std::sync::Arc;

use uuid::Uuid;
use wm_shared::types::Pagination;

use crate::domain::ownership::OwnedEntity;
use crate::errors::{DomainError, DomainResult, Failure};
use crate::repositories::{CreateOutcome, OwnedRepository};

/// Ownership-scoped CRUD service, generic over any [`OwnedEntity`].
///
/// Every operation runs with the identity of the calling user and never
/// trusts ownership information from the request body: mutating
/// operations re-verify the owner against the persisted record, and
/// `create` stamps the owner unconditionally. The service holds no
/// state beyond its repository and is safe to share across callers.
pub struct CrudService<T, R>
where
    T: OwnedEntity,
    R: OwnedRepository<T>,
{
    repository: Arc<R>,
    _entity: PhantomData<T>,
}

impl<T, R> CrudService<T, R>
where
    T: OwnedEntity,
    R: OwnedRepository<T>,
{
    /// Creates a new CRUD service over the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _entity: PhantomData,
        }
    }

    /// Lists one page of the entities owned by `context_user_id`.
    ///
    /// Scoping happens in the persistence call itself; records of other
    /// users are never loaded and filtered afterwards.
    pub async fn list(
        &self,
        pagination: Pagination,
        context_user_id: Uuid,
    ) -> DomainResult<Vec<T>> {
        if !pagination.is_valid() {
            return Err(Failure::bad_request(
                format!("Failed to get {}s.", T::ENTITY_NAME),
                "Invalid pagination parameters.",
            )
            .into());
        }

        Ok(self
            .repository
            .list_by_owner(context_user_id, pagination)
            .await?)
    }

    /// Fetches a single entity, enforcing ownership.
    ///
    /// A record owned by another user answers `Forbidden`, not
    /// `NotFound`; both take the same lookup path.
    pub async fn get(&self, id: Uuid, context_user_id: Uuid) -> DomainResult<T> {
        self.validate_stored(id, "get", context_user_id).await
    }

    /// Creates an entity owned by `context_user_id`.
    ///
    /// Whatever owner the caller put on the model is overwritten before
    /// anything is persisted, so the request body cannot assign records
    /// to someone else.
    pub async fn create(&self, mut model: T, context_user_id: Uuid) -> DomainResult<Uuid> {
        model.set_owner_id(context_user_id);

        match self.repository.create(&model).await? {
            CreateOutcome::Created(id) => {
                tracing::debug!(entity = T::ENTITY_NAME, %id, "entity created");
                Ok(id)
            }
            CreateOutcome::DuplicateKey => Err(Failure::conflict(
                format!("Failed to create {}.", T::ENTITY_NAME),
                format!("A {} with the same unique fields already exists.", T::ENTITY_NAME),
            )
            .into()),
        }
    }

    /// Replaces all fields of the entity at `id`.
    ///
    /// The body id, when set, must agree with the route id, and the body
    /// may not carry a different owner; both are rejected before the
    /// write. Ownership is checked against the stored record.
    pub async fn update(&self, id: Uuid, mut model: T, context_user_id: Uuid) -> DomainResult<()> {
        const ACTION: &str = "update";

        if !model.id().is_nil() && model.id() != id {
            return Err(Failure::bad_request(
                Self::error_title(ACTION, id),
                "Body object ID and route ID are different.",
            )
            .into());
        }

        self.validate_stored(id, ACTION, context_user_id).await?;

        if !model.owner_id().is_nil() && model.owner_id() != context_user_id {
            return Err(Failure::bad_request(
                Self::error_title(ACTION, id),
                "Body object UserID was changed, which is not permitted.",
            )
            .into());
        }

        model.set_id(id);
        model.set_owner_id(context_user_id);

        if !self.repository.update(&model).await? {
            // Row vanished between the ownership check and the write
            return Err(
                Failure::not_found_default(Self::error_title(ACTION, id), T::ENTITY_NAME).into(),
            );
        }

        Ok(())
    }

    /// Deletes the entity at `id`, enforcing ownership
    pub async fn delete(&self, id: Uuid, context_user_id: Uuid) -> DomainResult<()> {
        self.validate_stored(id, "delete", context_user_id).await?;
        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    /// Loads the stored record and checks it exists and belongs to the
    /// calling user
    async fn validate_stored(
        &self,
        id: Uuid,
        action: &str,
        context_user_id: Uuid,
    ) -> DomainResult<T> {
        let stored = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                DomainError::from(Failure::not_found_default(
                    Self::error_title(action, id),
                    T::ENTITY_NAME,
                ))
            })?;

        if stored.owner_id() != context_user_id {
            return Err(
                Failure::forbidden_default(Self::error_title(action, id), T::ENTITY_NAME).into(),
            );
        }

        Ok(stored)
    }

    fn error_title(action: &str, id: Uuid) -> String {
        format!("Failed to {} {} ID {}.", action, T::ENTITY_NAME, id)
    }
}
