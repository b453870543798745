//! Identity shared by every persisted record.

/// Primary key type used by every table.
pub type EntityId = i64;

/// A record with an identity field.
///
/// Generic repositories and services are written against this trait so the
/// CRUD plumbing exists once for all entities.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human readable entity name, used in logs and error messages
    const NAME: &'static str;

    /// Persisted identity, `None` until the repository assigns one
    fn id(&self) -> Option<EntityId>;
}
