//! Generic CRUD repository contract shared by every entity.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use common::{AppError, AppResult};
use domain::{Category, Entity, EntityId};

/// Persistence operations every entity supports.
///
/// `save` inserts when the entity has no id and updates otherwise; the
/// returned value carries the identity the database actually used.
#[async_trait]
pub trait CrudRepository<T: Entity>: Send + Sync {
    /// Insert or update
    async fn save(&self, entity: T) -> AppResult<T>;

    /// Find entity by primary key
    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<T>>;

    /// Find all entities
    async fn find_all(&self) -> AppResult<Vec<T>>;

    /// Delete entity by primary key. Missing rows are not an error.
    async fn delete_by_id(&self, id: EntityId) -> AppResult<()>;

    /// Delete a persisted entity
    async fn delete(&self, entity: T) -> AppResult<()> {
        match entity.id() {
            Some(id) => self.delete_by_id(id).await,
            None => Err(AppError::validation(format!(
                "Cannot delete a {} that was never saved",
                T::NAME
            ))),
        }
    }
}

/// Implements [`CrudRepository`] for a store holding `db: Arc<DatabaseConnection>`
/// whose entity module converts both ways with the domain type.
macro_rules! impl_crud_store {
    ($store:ty, $domain:ty, $module:ident) => {
        #[async_trait::async_trait]
        impl $crate::repository::CrudRepository<$domain> for $store {
            async fn save(&self, entity: $domain) -> common::AppResult<$domain> {
                use domain::Entity as _;
                use sea_orm::ActiveModelTrait;

                let is_new = entity.id().is_none();
                let active = $crate::repository::entities::$module::ActiveModel::from(entity);
                let model = if is_new {
                    active.insert(&*self.db).await?
                } else {
                    active.update(&*self.db).await?
                };

                Ok(<$domain>::from(model))
            }

            async fn find_by_id(
                &self,
                id: domain::EntityId,
            ) -> common::AppResult<Option<$domain>> {
                use sea_orm::EntityTrait;

                let result = $crate::repository::entities::$module::Entity::find_by_id(id)
                    .one(&*self.db)
                    .await?;

                Ok(result.map(<$domain>::from))
            }

            async fn find_all(&self) -> common::AppResult<Vec<$domain>> {
                use sea_orm::EntityTrait;

                let models = $crate::repository::entities::$module::Entity::find()
                    .all(&*self.db)
                    .await?;

                Ok(models.into_iter().map(<$domain>::from).collect())
            }

            async fn delete_by_id(&self, id: domain::EntityId) -> common::AppResult<()> {
                use sea_orm::EntityTrait;

                $crate::repository::entities::$module::Entity::delete_by_id(id)
                    .exec(&*self.db)
                    .await?;

                Ok(())
            }
        }
    };
}

pub(crate) use impl_crud_store;

/// Category repository. Categories need nothing beyond plain CRUD.
pub trait CategoryRepository: CrudRepository<Category> {}

/// SeaORM implementation of [`CategoryRepository`]
pub struct CategoryStore {
    db: Arc<DatabaseConnection>,
}

impl CategoryStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl_crud_store!(CategoryStore, Category, category);

impl CategoryRepository for CategoryStore {}
