//! Service container - one place to reach every service.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    CategoryManager, CategoryService, ExamManager, ExamService, QuestionManager, QuestionService,
    UserManager, UserService,
};
use crate::repository::{
    CategoryRepository, CategoryStore, ExamRepository, ExamStore, QuestionRepository,
    QuestionStore, RoleStore, UserRoleStore, UserStore,
};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn categories(&self) -> Arc<dyn CategoryService>;

    fn exams(&self) -> Arc<dyn ExamService>;

    fn questions(&self) -> Arc<dyn QuestionService>;

    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    category_service: Arc<dyn CategoryService>,
    exam_service: Arc<dyn ExamService>,
    question_service: Arc<dyn QuestionService>,
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a container from already built services
    pub fn new(
        category_service: Arc<dyn CategoryService>,
        exam_service: Arc<dyn ExamService>,
        question_service: Arc<dyn QuestionService>,
        user_service: Arc<dyn UserService>,
    ) -> Self {
        Self {
            category_service,
            exam_service,
            question_service,
            user_service,
        }
    }

    /// Wire every service to SeaORM stores sharing one connection pool
    pub fn from_connection(db: Arc<DatabaseConnection>) -> Self {
        let categories: Arc<dyn CategoryRepository> =
            Arc::new(CategoryStore::new(Arc::clone(&db)));
        let exams: Arc<dyn ExamRepository> = Arc::new(ExamStore::new(Arc::clone(&db)));
        let questions: Arc<dyn QuestionRepository> =
            Arc::new(QuestionStore::new(Arc::clone(&db)));

        let user_service = UserManager::new(
            Arc::new(UserStore::new(Arc::clone(&db))),
            Arc::new(RoleStore::new(Arc::clone(&db))),
            Arc::new(UserRoleStore::new(db)),
        );

        Self {
            category_service: Arc::new(CategoryManager::new(categories)),
            exam_service: Arc::new(ExamManager::new(exams)),
            question_service: Arc::new(QuestionManager::new(questions)),
            user_service: Arc::new(user_service),
        }
    }
}

impl ServiceContainer for Services {
    fn categories(&self) -> Arc<dyn CategoryService> {
        self.category_service.clone()
    }

    fn exams(&self) -> Arc<dyn ExamService> {
        self.exam_service.clone()
    }

    fn questions(&self) -> Arc<dyn QuestionService> {
        self.question_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
