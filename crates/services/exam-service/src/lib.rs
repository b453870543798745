//! Exam Service Library
//!
//! Categories, exams, questions and user accounts with roles, persisted in
//! PostgreSQL through SeaORM. The binary in `main.rs` exposes the operational
//! commands; the services are meant to be embedded by a front end.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::collections::HashSet;

use serde::Serialize;
use tracing::info;

use common::{AppError, AppResult};
use domain::{Password, Role, User, UserRole};

use crate::config::ExamServiceConfig;
use crate::infra::Database;
use crate::service::{ServiceContainer, Services};

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Fields for a new administrator account.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = ExamServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Verify the database is reachable.
pub async fn check_connection() -> Result<(), Box<dyn std::error::Error>> {
    let config = ExamServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    db.ping().await?;
    println!("Database connection OK");

    Ok(())
}

/// Create (or update) an administrator account and print it as JSON.
pub async fn create_admin(account: AdminAccount) -> Result<(), Box<dyn std::error::Error>> {
    let config = ExamServiceConfig::from_env();
    let db = Database::connect(&config.database).await?;
    let services = Services::from_connection(db.get_connection());

    let saved = register_admin(&services, account).await?;
    println!("{}", serde_json::to_string_pretty(&saved)?);

    Ok(())
}

/// Printable reason for a failed command.
///
/// Application errors are logged with their code and reduced to their safe
/// message; anything else prints as is.
pub fn failure_message(err: &(dyn std::error::Error + 'static)) -> String {
    match err.downcast_ref::<AppError>() {
        Some(app_err) => {
            tracing::error!(code = app_err.code(), "Command failed");
            app_err.user_message()
        }
        None => err.to_string(),
    }
}

/// Saved administrator with the role associations it ended up with.
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub user: User,
    pub roles: Vec<UserRole>,
}

/// Hash the password and save the account with the ADMIN role only.
pub async fn register_admin(
    services: &dyn ServiceContainer,
    account: AdminAccount,
) -> AppResult<RegisteredUser> {
    let password = Password::new(&account.password)?;

    let user = User {
        password_hash: password.into(),
        first_name: account.first_name,
        last_name: account.last_name,
        email: account.email,
        phone: account.phone,
        ..User::new(account.username)
    };

    let users = services.users();
    let saved = users.save(user, HashSet::from([Role::admin()])).await?;

    let user_id = saved
        .id
        .ok_or_else(|| AppError::internal("Saved administrator has no id"))?;
    let roles = users.roles_of(user_id).await?;

    Ok(RegisteredUser { user: saved, roles })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;

    use super::*;
    use crate::repository::mocks::{
        MockCategoryRepo, MockExamRepo, MockQuestionRepo, MockRoleRepo, MockUserRepo,
        MockUserRoleRepo,
    };
    use crate::service::{CategoryManager, ExamManager, QuestionManager, UserManager};
    use domain::ROLE_ADMIN_ID;

    fn services(users: MockUserRepo, roles: MockRoleRepo, user_roles: MockUserRoleRepo) -> Services {
        Services::new(
            Arc::new(CategoryManager::new(Arc::new(MockCategoryRepo::new()))),
            Arc::new(ExamManager::new(Arc::new(MockExamRepo::new()))),
            Arc::new(QuestionManager::new(Arc::new(MockQuestionRepo::new()))),
            Arc::new(UserManager::new(
                Arc::new(users),
                Arc::new(roles),
                Arc::new(user_roles),
            )),
        )
    }

    fn account(password: &str) -> AdminAccount {
        AdminAccount {
            username: "admin".to_string(),
            password: password.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            phone: String::new(),
        }
    }

    #[tokio::test]
    async fn test_register_admin_hashes_password_and_grants_admin() {
        let mut users = MockUserRepo::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users
            .expect_save()
            .withf(|user| {
                user.username == "admin"
                    && user.password_hash != "s3cret-pass"
                    && Password::from_hash(user.password_hash.clone()).verify("s3cret-pass")
            })
            .times(1)
            .returning(|user| Ok(User { id: Some(1), ..user }));

        let mut roles = MockRoleRepo::new();
        roles
            .expect_save()
            .with(eq(Role::admin()))
            .times(1)
            .returning(Ok);

        // First lookup comes from reconciliation, second from register_admin
        let mut lookups = 0;
        let mut user_roles = MockUserRoleRepo::new();
        user_roles
            .expect_find_by_user()
            .with(eq(1))
            .times(2)
            .returning(move |_| {
                lookups += 1;
                if lookups == 1 {
                    Ok(vec![])
                } else {
                    Ok(vec![UserRole {
                        id: Some(5),
                        user_id: 1,
                        role_id: ROLE_ADMIN_ID,
                    }])
                }
            });
        user_roles
            .expect_save()
            .with(eq(UserRole::new(1, ROLE_ADMIN_ID)))
            .times(1)
            .returning(|assoc| Ok(UserRole { id: Some(5), ..assoc }));

        let services = services(users, roles, user_roles);
        let registered = register_admin(&services, account("s3cret-pass"))
            .await
            .unwrap();

        assert_eq!(registered.user.id, Some(1));
        assert_eq!(registered.roles.len(), 1);
        assert_eq!(registered.roles[0].role_id, ROLE_ADMIN_ID);

        let json = serde_json::to_string(&registered).unwrap();
        assert!(!json.contains("password_hash"));
    }

    #[tokio::test]
    async fn test_register_admin_rejects_short_password() {
        let mut users = MockUserRepo::new();
        users.expect_save().never();

        let services = services(users, MockRoleRepo::new(), MockUserRoleRepo::new());
        let result = register_admin(&services, account("short")).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_failure_message_shows_validation_text() {
        let err: Box<dyn std::error::Error> =
            Box::new(AppError::validation("Password must be at least 8 characters"));

        assert_eq!(
            failure_message(err.as_ref()),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn test_failure_message_hides_internal_details() {
        let err: Box<dyn std::error::Error> =
            Box::new(AppError::internal("argon2 params rejected"));
        let message = failure_message(err.as_ref());

        assert_eq!(message, "An internal error occurred");
        assert!(!message.contains("argon2"));
    }

    #[test]
    fn test_failure_message_passes_other_errors_through() {
        let err: Box<dyn std::error::Error> = Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));

        assert_eq!(failure_message(err.as_ref()), "connection refused");
    }
}
