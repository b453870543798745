//! User service - account upsert with role reconciliation.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::{reconcile_roles, EntityId, Role, User, UserRole};

use crate::repository::{RoleRepository, UserRepository, UserRoleRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register or update a user so that its roles are exactly `roles`.
    ///
    /// The username decides between registration and update. On update the
    /// stored id wins over whatever id the incoming user carries. The
    /// lookup and the write are separate repository calls, so two concurrent
    /// registrations of one username race; the losing insert fails on the
    /// unique username index.
    async fn save(&self, user: User, roles: HashSet<Role>) -> AppResult<User>;

    /// Find user by username, `None` when absent
    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Remove a user. Its role associations go with it.
    async fn delete_by_id(&self, id: EntityId) -> AppResult<()>;

    /// Current role associations of a user
    async fn roles_of(&self, user_id: EntityId) -> AppResult<Vec<UserRole>>;
}

/// Concrete implementation of UserService using repositories.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    user_roles: Arc<dyn UserRoleRepository>,
}

impl UserManager {
    /// Create new user service instance with repositories
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        user_roles: Arc<dyn UserRoleRepository>,
    ) -> Self {
        Self {
            users,
            roles,
            user_roles,
        }
    }

    /// Make `user_id`'s associations match `desired`, writing only the
    /// differences.
    async fn reconcile(&self, user_id: EntityId, desired: &HashSet<Role>) -> AppResult<()> {
        let current = self.user_roles.find_by_user(user_id).await?;
        let changes = reconcile_roles(&current, desired);

        if changes.is_empty() {
            return Ok(());
        }

        for role in changes.to_add {
            let role_id = role.id;
            self.roles.save(role).await?;
            self.user_roles.save(UserRole::new(user_id, role_id)).await?;
            tracing::info!(user_id, role_id, "Role granted");
        }

        for assoc in changes.to_remove {
            let id = assoc.id.ok_or_else(|| {
                AppError::internal("User role repository returned an association without id")
            })?;
            self.user_roles.delete_by_id(id).await?;
            tracing::info!(user_id, role_id = assoc.role_id, "Role revoked");
        }

        Ok(())
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn save(&self, mut user: User, roles: HashSet<Role>) -> AppResult<User> {
        let existing = self.users.find_by_username(&user.username).await?;
        let is_new = existing.is_none();

        if let Some(existing) = existing {
            user.id = existing.id;
        } else {
            user.id = None;
        }

        let saved = self.users.save(user).await?;
        let user_id = saved
            .id
            .ok_or_else(|| AppError::internal("User repository returned a user without id"))?;

        self.reconcile(user_id, &roles).await?;

        if is_new {
            tracing::info!(user_id, username = %saved.username, "User registered");
        } else {
            tracing::info!(user_id, username = %saved.username, "User updated");
        }

        Ok(saved)
    }

    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.users.find_by_username(username).await
    }

    async fn delete_by_id(&self, id: EntityId) -> AppResult<()> {
        tracing::debug!(user_id = id, "Deleting user");
        self.users.delete_by_id(id).await
    }

    async fn roles_of(&self, user_id: EntityId) -> AppResult<Vec<UserRole>> {
        self.user_roles.find_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use mockall::Sequence;

    use super::*;
    use crate::repository::mocks::{MockRoleRepo, MockUserRepo, MockUserRoleRepo};
    use domain::{ROLE_ADMIN_ID, ROLE_NORMAL_ID};

    fn test_user() -> User {
        User {
            password_hash: "hashed".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "test@example.com".to_string(),
            ..User::new("testuser")
        }
    }

    fn stored_user(id: EntityId) -> User {
        User {
            id: Some(id),
            ..test_user()
        }
    }

    fn assoc(id: EntityId, user_id: EntityId, role_id: EntityId) -> UserRole {
        UserRole {
            id: Some(id),
            user_id,
            role_id,
        }
    }

    fn service(
        users: MockUserRepo,
        roles: MockRoleRepo,
        user_roles: MockUserRoleRepo,
    ) -> UserManager {
        UserManager::new(Arc::new(users), Arc::new(roles), Arc::new(user_roles))
    }

    #[tokio::test]
    async fn test_save_registers_new_user() {
        let mut users = MockUserRepo::new();
        users
            .expect_find_by_username()
            .withf(|username: &str| username == "testuser")
            .returning(|_| Ok(None));
        users
            .expect_save()
            .withf(|user| user.id.is_none() && user.username == "testuser")
            .times(1)
            .returning(|user| Ok(User { id: Some(1), ..user }));

        let mut roles = MockRoleRepo::new();
        roles
            .expect_save()
            .with(eq(Role::normal()))
            .times(1)
            .returning(Ok);

        let mut user_roles = MockUserRoleRepo::new();
        user_roles
            .expect_find_by_user()
            .with(eq(1))
            .returning(|_| Ok(vec![]));
        user_roles
            .expect_save()
            .with(eq(UserRole::new(1, ROLE_NORMAL_ID)))
            .times(1)
            .returning(|assoc| Ok(UserRole { id: Some(10), ..assoc }));

        let service = service(users, roles, user_roles);
        let saved = service
            .save(test_user(), HashSet::from([Role::normal()]))
            .await
            .unwrap();

        assert_eq!(saved.username, "testuser");
        assert_eq!(saved.id, Some(1));
    }

    #[tokio::test]
    async fn test_save_persists_user_before_roles() {
        let mut seq = Sequence::new();

        let mut users = MockUserRepo::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|user| Ok(User { id: Some(1), ..user }));

        let mut roles = MockRoleRepo::new();
        roles
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(Ok);

        let mut user_roles = MockUserRoleRepo::new();
        user_roles.expect_find_by_user().returning(|_| Ok(vec![]));
        user_roles
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(Ok);

        let service = service(users, roles, user_roles);
        let result = service
            .save(test_user(), HashSet::from([Role::normal()]))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_save_existing_user_keeps_stored_id() {
        let mut users = MockUserRepo::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user(7))));
        users
            .expect_save()
            .withf(|user| user.id == Some(7) && user.email == "new@example.com")
            .times(1)
            .returning(Ok);

        let mut roles = MockRoleRepo::new();
        roles.expect_save().never();

        let mut user_roles = MockUserRoleRepo::new();
        user_roles
            .expect_find_by_user()
            .with(eq(7))
            .returning(|_| Ok(vec![assoc(70, 7, ROLE_NORMAL_ID)]));
        user_roles.expect_save().never();
        user_roles.expect_delete_by_id().never();

        let incoming = User {
            id: Some(999),
            email: "new@example.com".to_string(),
            ..test_user()
        };

        let service = service(users, roles, user_roles);
        let saved = service
            .save(incoming, HashSet::from([Role::normal()]))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(7));
        assert_eq!(saved.email, "new@example.com");
    }

    #[tokio::test]
    async fn test_save_existing_user_writes_only_role_differences() {
        let mut users = MockUserRepo::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user(7))));
        users.expect_save().times(1).returning(Ok);

        let mut roles = MockRoleRepo::new();
        roles
            .expect_save()
            .with(eq(Role::admin()))
            .times(1)
            .returning(Ok);

        let mut user_roles = MockUserRoleRepo::new();
        user_roles
            .expect_find_by_user()
            .with(eq(7))
            .returning(|_| Ok(vec![assoc(70, 7, ROLE_NORMAL_ID), assoc(71, 7, 3)]));
        user_roles
            .expect_save()
            .with(eq(UserRole::new(7, ROLE_ADMIN_ID)))
            .times(1)
            .returning(|assoc| Ok(UserRole { id: Some(72), ..assoc }));
        user_roles
            .expect_delete_by_id()
            .with(eq(71))
            .times(1)
            .returning(|_| Ok(()));

        // Keep NORMAL, add ADMIN, drop role 3
        let desired = HashSet::from([Role::normal(), Role::admin()]);

        let service = service(users, roles, user_roles);
        let result = service.save(test_user(), desired).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_save_fails_when_stale_association_has_no_id() {
        let mut users = MockUserRepo::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user(7))));
        users.expect_save().times(1).returning(Ok);

        let mut user_roles = MockUserRoleRepo::new();
        user_roles.expect_find_by_user().returning(|_| {
            Ok(vec![
                UserRole {
                    id: None,
                    user_id: 7,
                    role_id: ROLE_ADMIN_ID,
                },
                assoc(70, 7, ROLE_NORMAL_ID),
            ])
        });
        user_roles.expect_save().never();
        user_roles.expect_delete_by_id().never();

        let service = service(users, MockRoleRepo::new(), user_roles);
        let result = service
            .save(test_user(), HashSet::from([Role::normal()]))
            .await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_save_propagates_repository_failure() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users
            .expect_save()
            .times(1)
            .returning(|_| Err(AppError::internal("duplicate key")));

        let mut user_roles = MockUserRoleRepo::new();
        user_roles.expect_find_by_user().never();

        let service = service(users, MockRoleRepo::new(), user_roles);
        let result = service
            .save(test_user(), HashSet::from([Role::normal()]))
            .await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_get_by_username() {
        let mut users = MockUserRepo::new();
        users
            .expect_find_by_username()
            .withf(|username: &str| username == "testuser")
            .returning(|_| Ok(Some(stored_user(1))));

        let service = service(users, MockRoleRepo::new(), MockUserRoleRepo::new());
        let found = service.get_by_username("testuser").await.unwrap().unwrap();

        assert_eq!(found.username, "testuser");
    }

    #[tokio::test]
    async fn test_get_by_username_missing_is_none() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_username().returning(|_| Ok(None));

        let service = service(users, MockRoleRepo::new(), MockUserRoleRepo::new());

        assert!(service.get_by_username("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_user() {
        let mut users = MockUserRepo::new();
        users
            .expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        let service = service(users, MockRoleRepo::new(), MockUserRoleRepo::new());

        assert!(service.delete_by_id(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_roles_of() {
        let mut user_roles = MockUserRoleRepo::new();
        user_roles
            .expect_find_by_user()
            .with(eq(1))
            .returning(|_| Ok(vec![assoc(10, 1, ROLE_ADMIN_ID)]));

        let service = service(MockUserRepo::new(), MockRoleRepo::new(), user_roles);
        let roles = service.roles_of(1).await.unwrap();

        assert_eq!(roles, vec![assoc(10, 1, ROLE_ADMIN_ID)]);
    }
}
