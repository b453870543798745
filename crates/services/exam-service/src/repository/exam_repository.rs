//! Exam repository with category and activity finders.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::base::{impl_crud_store, CrudRepository};
use super::entities::exam::{self, Entity as ExamEntity};
use common::AppResult;
use domain::{Category, Exam};

/// Exam repository trait for dependency injection.
#[async_trait]
pub trait ExamRepository: CrudRepository<Exam> {
    /// Exams filed under `category`
    async fn find_by_category(&self, category: &Category) -> AppResult<Vec<Exam>>;

    /// Exams whose active flag equals `active`
    async fn find_by_active(&self, active: bool) -> AppResult<Vec<Exam>>;

    /// Exams filed under `category` whose active flag equals `active`
    async fn find_by_category_and_active(
        &self,
        category: &Category,
        active: bool,
    ) -> AppResult<Vec<Exam>>;
}

/// Concrete implementation of ExamRepository
pub struct ExamStore {
    db: Arc<DatabaseConnection>,
}

impl ExamStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn list(&self, query: sea_orm::Select<ExamEntity>) -> AppResult<Vec<Exam>> {
        let models = query
            .order_by_asc(exam::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(models.into_iter().map(Exam::from).collect())
    }
}

impl_crud_store!(ExamStore, Exam, exam);

#[async_trait]
impl ExamRepository for ExamStore {
    async fn find_by_category(&self, category: &Category) -> AppResult<Vec<Exam>> {
        // An unsaved category cannot own exams
        let Some(category_id) = category.id else {
            return Ok(Vec::new());
        };

        self.list(ExamEntity::find().filter(exam::Column::CategoryId.eq(category_id)))
            .await
    }

    async fn find_by_active(&self, active: bool) -> AppResult<Vec<Exam>> {
        self.list(ExamEntity::find().filter(exam::Column::Active.eq(active)))
            .await
    }

    async fn find_by_category_and_active(
        &self,
        category: &Category,
        active: bool,
    ) -> AppResult<Vec<Exam>> {
        let Some(category_id) = category.id else {
            return Ok(Vec::new());
        };

        self.list(
            ExamEntity::find()
                .filter(exam::Column::CategoryId.eq(category_id))
                .filter(exam::Column::Active.eq(active)),
        )
        .await
    }
}
