//! Exam service - CRUD plus category and activity listings.

use async_trait::async_trait;

use common::AppResult;
use domain::{Category, Exam};

use super::crud::{CrudFacade, CrudService};
use crate::repository::ExamRepository;

/// Exam service trait for dependency injection.
///
/// Listings return exactly what the repository query yields, in its order.
#[async_trait]
pub trait ExamService: CrudService<Exam> {
    /// Exams of one category
    async fn list_by_category(&self, category: &Category) -> AppResult<Vec<Exam>>;

    /// Exams open to students
    async fn list_active(&self) -> AppResult<Vec<Exam>>;

    /// Exams of one category open to students
    async fn list_active_by_category(&self, category: &Category) -> AppResult<Vec<Exam>>;
}

#[async_trait]
impl<R: ExamRepository + ?Sized> ExamService for CrudFacade<Exam, R> {
    async fn list_by_category(&self, category: &Category) -> AppResult<Vec<Exam>> {
        self.repo().find_by_category(category).await
    }

    async fn list_active(&self) -> AppResult<Vec<Exam>> {
        self.repo().find_by_active(true).await
    }

    async fn list_active_by_category(&self, category: &Category) -> AppResult<Vec<Exam>> {
        self.repo().find_by_category_and_active(category, true).await
    }
}

/// Concrete exam service
pub type ExamManager = CrudFacade<Exam, dyn ExamRepository>;
