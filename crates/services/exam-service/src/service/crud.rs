//! Generic CRUD facade.
//!
//! Category, exam and question services are all `CrudFacade` instances;
//! entity-specific operations are added as extra traits implemented on the
//! matching instantiation.

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use common::AppResult;
use domain::{Entity, EntityId};

use crate::repository::CrudRepository;

/// CRUD operations exposed by every entity service.
#[async_trait]
pub trait CrudService<T: Entity>: Send + Sync {
    /// Persist a new entity, returning what the repository returns
    async fn add(&self, entity: T) -> AppResult<T>;

    /// Persist changes. Same delegation as `add`; the repository decides
    /// between insert and update.
    async fn update(&self, entity: T) -> AppResult<T>;

    /// All entities, duplicates collapsed, no order promised
    async fn list_all(&self) -> AppResult<HashSet<T>>;

    /// Entity by id, `None` when absent
    async fn get_by_id(&self, id: EntityId) -> AppResult<Option<T>>;

    /// Remove by id without checking existence first
    async fn delete_by_id(&self, id: EntityId) -> AppResult<()>;
}

/// Pass-through [`CrudService`] over a repository.
pub struct CrudFacade<T, R: ?Sized> {
    repo: Arc<R>,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R: ?Sized> CrudFacade<T, R> {
    /// Create new service instance with repository
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            _entity: PhantomData,
        }
    }

    /// Underlying repository, for entity-specific operations
    pub(crate) fn repo(&self) -> &R {
        &self.repo
    }
}

#[async_trait]
impl<T, R> CrudService<T> for CrudFacade<T, R>
where
    T: Entity + Eq + Hash,
    R: CrudRepository<T> + ?Sized,
{
    async fn add(&self, entity: T) -> AppResult<T> {
        tracing::debug!(entity = T::NAME, "Adding");
        self.repo.save(entity).await
    }

    async fn update(&self, entity: T) -> AppResult<T> {
        tracing::debug!(entity = T::NAME, id = ?entity.id(), "Updating");
        self.repo.save(entity).await
    }

    async fn list_all(&self) -> AppResult<HashSet<T>> {
        let all = self.repo.find_all().await?;
        Ok(all.into_iter().collect())
    }

    async fn get_by_id(&self, id: EntityId) -> AppResult<Option<T>> {
        self.repo.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: EntityId) -> AppResult<()> {
        tracing::debug!(entity = T::NAME, id, "Deleting");
        self.repo.delete_by_id(id).await
    }
}
