use uuid::Uuid;

use crate::server::error::ServerError;

/// Tag handed to the pre-persist hook so entities stamp their own
/// timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOp {
    Create,
    Update,
}

/// Identity and timestamp capability every persisted entity provides.
pub trait Persistable {
    fn id(&self) -> Uuid;

    /// Pre-persist hook. `Create` stamps `created_on` and clears
    /// `updated_on`, `Update` advances `updated_on`.
    fn touch(&mut self, op: PersistOp);
}

/// Uniform storage contract shared by all entity repositories. Concrete
/// repositories compose these operations with their own child-lookup
/// queries.
#[allow(async_fn_in_trait)]
pub trait Repository {
    type Entity: Persistable;

    /// Every persisted entity, order unspecified.
    async fn get_all(&self) -> Result<Vec<Self::Entity>, ServerError>;

    /// `None` when the id does not exist. Absence is not an error; handlers
    /// rely on this for existence checks.
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Self::Entity>, ServerError>;

    /// Stamps the creation timestamp, persists, and returns the stored
    /// entity.
    async fn add(&self, entity: Self::Entity) -> Result<Self::Entity, ServerError>;

    /// Persists the mutable fields of an already-loaded entity and advances
    /// `updated_on`.
    async fn update(&self, entity: Self::Entity) -> Result<Self::Entity, ServerError>;

    /// Removes the entity permanently. Cascades are the schema's concern.
    async fn delete(&self, entity: Self::Entity) -> Result<(), ServerError>;
}
