//! Ownership capability for domain entities.

use uuid::Uuid;

/// Capability trait for entities that are permanently bound to the user
/// who created them.
///
/// The ownership-scoped CRUD service is generic over this trait: any
/// entity exposing its identifier and owner through it gets list, get,
/// create, update and delete with per-record authorization for free.
/// A nil UUID in either field means "not set by the caller"; the service
/// stamps both before anything is persisted.
pub trait OwnedEntity: Clone + Send + Sync {
    /// Entity name used in user-facing failure messages, e.g. "Aircraft"
    const ENTITY_NAME: &'static str;

    /// Unique identifier (nil until assigned by the backing store)
    fn id(&self) -> Uuid;

    /// Replace the identifier
    fn set_id(&mut self, id: Uuid);

    /// Identifier of the owning user (nil until stamped)
    fn owner_id(&self) -> Uuid;

    /// Replace the owner identifier
    fn set_owner_id(&mut self, owner_id: Uuid);
}
