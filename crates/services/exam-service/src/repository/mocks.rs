//! mockall doubles for the repository traits.
//!
//! The entity-specific traits extend the generic `CrudRepository`, so each
//! mock implements both traits through `mock!`.

use async_trait::async_trait;
use mockall::mock;

use super::{
    CategoryRepository, CrudRepository, ExamRepository, QuestionRepository, RoleRepository,
    UserRepository, UserRoleRepository,
};
use common::AppResult;
use domain::{Category, EntityId, Exam, Question, Role, User, UserRole};

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CrudRepository<Category> for CategoryRepo {
        async fn save(&self, entity: Category) -> AppResult<Category>;
        async fn find_by_id(&self, id: EntityId) -> AppResult<Option<Category>>;
        async fn find_all(&self) -> AppResult<Vec<Category>>;
        async fn delete_by_id(&self, id: EntityId) -> AppResult<()>;
    }

    impl CategoryRepository for CategoryRepo {}
}

mock! {
    pub ExamRepo {}

    #[async_trait]
    impl CrudRepository<Exam> for ExamRepo {
        async fn save(&self, entity: Exam) -> AppResult<Exam>;
        async fn find_by_id(&self, id: EntityId) -> AppResult<Option<Exam>>;
        async fn find_all(&self) -> AppResult<Vec<Exam>>;
        async fn delete_by_id(&self, id: EntityId) -> AppResult<()>;
    }

    #[async_trait]
    impl ExamRepository for ExamRepo {
        async fn find_by_category(&self, category: &Category) -> AppResult<Vec<Exam>>;
        async fn find_by_active(&self, active: bool) -> AppResult<Vec<Exam>>;
        async fn find_by_category_and_active(
            &self,
            category: &Category,
            active: bool,
        ) -> AppResult<Vec<Exam>>;
    }
}

mock! {
    pub QuestionRepo {}

    #[async_trait]
    impl CrudRepository<Question> for QuestionRepo {
        async fn save(&self, entity: Question) -> AppResult<Question>;
        async fn find_by_id(&self, id: EntityId) -> AppResult<Option<Question>>;
        async fn find_all(&self) -> AppResult<Vec<Question>>;
        async fn delete_by_id(&self, id: EntityId) -> AppResult<()>;
    }

    #[async_trait]
    impl QuestionRepository for QuestionRepo {
        async fn find_by_exam(&self, exam: &Exam) -> AppResult<Vec<Question>>;
        async fn get_one(&self, id: EntityId) -> AppResult<Question>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl CrudRepository<User> for UserRepo {
        async fn save(&self, entity: User) -> AppResult<User>;
        async fn find_by_id(&self, id: EntityId) -> AppResult<Option<User>>;
        async fn find_all(&self) -> AppResult<Vec<User>>;
        async fn delete_by_id(&self, id: EntityId) -> AppResult<()>;
    }

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    }
}

mock! {
    pub RoleRepo {}

    #[async_trait]
    impl CrudRepository<Role> for RoleRepo {
        async fn save(&self, entity: Role) -> AppResult<Role>;
        async fn find_by_id(&self, id: EntityId) -> AppResult<Option<Role>>;
        async fn find_all(&self) -> AppResult<Vec<Role>>;
        async fn delete_by_id(&self, id: EntityId) -> AppResult<()>;
    }

    #[async_trait]
    impl RoleRepository for RoleRepo {
        async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;
    }
}

mock! {
    pub UserRoleRepo {}

    #[async_trait]
    impl CrudRepository<UserRole> for UserRoleRepo {
        async fn save(&self, entity: UserRole) -> AppResult<UserRole>;
        async fn find_by_id(&self, id: EntityId) -> AppResult<Option<UserRole>>;
        async fn find_all(&self) -> AppResult<Vec<UserRole>>;
        async fn delete_by_id(&self, id: EntityId) -> AppResult<()>;
    }

    #[async_trait]
    impl UserRoleRepository for UserRoleRepo {
        async fn find_by_user(&self, user_id: EntityId) -> AppResult<Vec<UserRole>>;
    }
}
