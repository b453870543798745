//! User, role and user-role repositories.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::base::{impl_crud_store, CrudRepository};
use super::entities::role::{self, ActiveModel as RoleActiveModel, Entity as RoleEntity};
use super::entities::user::{self, Entity as UserEntity};
use super::entities::user_role::{self, Entity as UserRoleEntity};
use common::AppResult;
use domain::{EntityId, Role, User, UserRole};

/// User repository trait for dependency injection.
#[async_trait]
pub trait UserRepository: CrudRepository<User> {
    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// Role repository trait.
///
/// `save` is an upsert on the role id, since role ids are fixed by the
/// application.
#[async_trait]
pub trait RoleRepository: CrudRepository<Role> {
    /// Find role by exact name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;
}

/// User-role association repository trait.
#[async_trait]
pub trait UserRoleRepository: CrudRepository<UserRole> {
    /// All associations of one user
    async fn find_by_user(&self, user_id: EntityId) -> AppResult<Vec<UserRole>>;
}

// =============================================================================
// Users
// =============================================================================

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl_crud_store!(UserStore, User, user);

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&*self.db)
            .await?;

        Ok(result.map(User::from))
    }
}

// =============================================================================
// Roles
// =============================================================================

/// Concrete implementation of RoleRepository
pub struct RoleStore {
    db: Arc<DatabaseConnection>,
}

impl RoleStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CrudRepository<Role> for RoleStore {
    async fn save(&self, role: Role) -> AppResult<Role> {
        RoleEntity::insert(RoleActiveModel::from(role.clone()))
            .on_conflict(
                OnConflict::column(role::Column::Id)
                    .update_column(role::Column::Name)
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await?;

        Ok(role)
    }

    async fn find_by_id(&self, id: EntityId) -> AppResult<Option<Role>> {
        let result = RoleEntity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Role::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Role>> {
        let models = RoleEntity::find()
            .order_by_asc(role::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(models.into_iter().map(Role::from).collect())
    }

    async fn delete_by_id(&self, id: EntityId) -> AppResult<()> {
        RoleEntity::delete_by_id(id).exec(&*self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let result = RoleEntity::find()
            .filter(role::Column::Name.eq(name))
            .one(&*self.db)
            .await?;

        Ok(result.map(Role::from))
    }
}

// =============================================================================
// User roles
// =============================================================================

/// Concrete implementation of UserRoleRepository
pub struct UserRoleStore {
    db: Arc<DatabaseConnection>,
}

impl UserRoleStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl_crud_store!(UserRoleStore, UserRole, user_role);

#[async_trait]
impl UserRoleRepository for UserRoleStore {
    async fn find_by_user(&self, user_id: EntityId) -> AppResult<Vec<UserRole>> {
        let models = UserRoleEntity::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .order_by_asc(user_role::Column::RoleId)
            .all(&*self.db)
            .await?;

        Ok(models.into_iter().map(UserRole::from).collect())
    }
}
