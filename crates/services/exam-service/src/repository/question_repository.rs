//! Question repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::base::{impl_crud_store, CrudRepository};
use super::entities::question::{self, Entity as QuestionEntity};
use common::{AppResult, OptionExt};
use domain::{Entity, EntityId, Exam, Question};

/// Question repository trait for dependency injection.
#[async_trait]
pub trait QuestionRepository: CrudRepository<Question> {
    /// Questions belonging to `exam`
    async fn find_by_exam(&self, exam: &Exam) -> AppResult<Vec<Question>>;

    /// Question by id, failing with `NotFound` when it does not exist
    async fn get_one(&self, id: EntityId) -> AppResult<Question>;
}

/// Concrete implementation of QuestionRepository
pub struct QuestionStore {
    db: Arc<DatabaseConnection>,
}

impl QuestionStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl_crud_store!(QuestionStore, Question, question);

#[async_trait]
impl QuestionRepository for QuestionStore {
    async fn find_by_exam(&self, exam: &Exam) -> AppResult<Vec<Question>> {
        let Some(exam_id) = exam.id else {
            return Ok(Vec::new());
        };

        let models = QuestionEntity::find()
            .filter(question::Column::ExamId.eq(exam_id))
            .order_by_asc(question::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(models.into_iter().map(Question::from).collect())
    }

    async fn get_one(&self, id: EntityId) -> AppResult<Question> {
        self.find_by_id(id).await?.ok_or_not_found(Question::NAME)
    }
}
