//! Question service - CRUD, per-exam listings and attempt grading.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use common::AppResult;
use domain::{EntityId, Evaluation, Exam, Question};

use super::crud::{CrudFacade, CrudService};
use crate::repository::QuestionRepository;

/// Question service trait for dependency injection.
#[async_trait]
pub trait QuestionService: CrudService<Question> {
    /// Questions of one exam
    async fn list_by_exam(&self, exam: &Exam) -> AppResult<HashSet<Question>>;

    /// Question by id for callers that already know it exists.
    ///
    /// Unlike `get_by_id`, absence is an error (`AppError::NotFound`).
    async fn get_required(&self, id: EntityId) -> AppResult<Question>;

    /// Questions served to a student: at most `exam.question_count` of them,
    /// answers blanked
    async fn list_for_attempt(&self, exam: &Exam) -> AppResult<Vec<Question>>;

    /// Grade submitted answers (question id to chosen option)
    async fn evaluate(
        &self,
        exam: &Exam,
        answers: &HashMap<EntityId, String>,
    ) -> AppResult<Evaluation>;
}

#[async_trait]
impl<R: QuestionRepository + ?Sized> QuestionService for CrudFacade<Question, R> {
    async fn list_by_exam(&self, exam: &Exam) -> AppResult<HashSet<Question>> {
        let questions = self.repo().find_by_exam(exam).await?;
        Ok(questions.into_iter().collect())
    }

    async fn get_required(&self, id: EntityId) -> AppResult<Question> {
        self.repo().get_one(id).await
    }

    async fn list_for_attempt(&self, exam: &Exam) -> AppResult<Vec<Question>> {
        let limit = usize::try_from(exam.question_count).unwrap_or(0);
        let questions = self.repo().find_by_exam(exam).await?;

        Ok(questions
            .iter()
            .take(limit)
            .map(Question::without_answer)
            .collect())
    }

    async fn evaluate(
        &self,
        exam: &Exam,
        answers: &HashMap<EntityId, String>,
    ) -> AppResult<Evaluation> {
        let questions = self.repo().find_by_exam(exam).await?;
        let evaluation = Evaluation::grade(exam, &questions, answers);

        tracing::info!(
            exam_id = ?exam.id,
            attempted = evaluation.attempted,
            correct = evaluation.correct,
            points = evaluation.points,
            "Exam evaluated"
        );

        Ok(evaluation)
    }
}

/// Concrete question service
pub type QuestionManager = CrudFacade<Question, dyn QuestionRepository>;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;

    use super::*;
    use crate::repository::mocks::MockQuestionRepo;
    use common::AppError;

    fn exam() -> Exam {
        Exam {
            id: Some(1),
            title: "Geography".to_string(),
            max_points: 20,
            question_count: 2,
            active: true,
            category_id: 1,
            ..Default::default()
        }
    }

    fn question(id: i64, content: &str, answer: &str) -> Question {
        Question {
            id: Some(id),
            content: content.to_string(),
            image: None,
            option1: "Paris".to_string(),
            option2: "London".to_string(),
            option3: "Berlin".to_string(),
            option4: "Madrid".to_string(),
            answer: answer.to_string(),
            exam_id: 1,
        }
    }

    fn capital_of_france() -> Question {
        question(1, "What is the capital of France?", "Paris")
    }

    #[tokio::test]
    async fn test_add_question() {
        let mut repo = MockQuestionRepo::new();
        repo.expect_save().times(1).returning(Ok);

        let service = QuestionManager::new(Arc::new(repo));
        let added = service.add(capital_of_france()).await.unwrap();

        assert_eq!(added.content, "What is the capital of France?");
    }

    #[tokio::test]
    async fn test_update_question() {
        let mut repo = MockQuestionRepo::new();
        repo.expect_save().times(1).returning(Ok);

        let service = QuestionManager::new(Arc::new(repo));
        let updated = service.update(capital_of_france()).await.unwrap();

        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.content, "What is the capital of France?");
    }

    #[tokio::test]
    async fn test_list_questions() {
        let mut repo = MockQuestionRepo::new();
        repo.expect_find_all()
            .returning(|| Ok(vec![capital_of_france()]));

        let service = QuestionManager::new(Arc::new(repo));
        let questions = service.list_all().await.unwrap();

        assert_eq!(questions.len(), 1);
    }

    #[tokio::test]
    async fn test_get_question() {
        let mut repo = MockQuestionRepo::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(capital_of_france())));

        let service = QuestionManager::new(Arc::new(repo));
        let found = service.get_by_id(1).await.unwrap().unwrap();

        assert_eq!(found.content, "What is the capital of France?");
    }

    #[tokio::test]
    async fn test_list_by_exam() {
        let mut repo = MockQuestionRepo::new();
        repo.expect_find_by_exam()
            .withf(|e| e.id == Some(1))
            .times(1)
            .returning(|_| Ok(vec![capital_of_france()]));

        let service = QuestionManager::new(Arc::new(repo));
        let questions = service.list_by_exam(&exam()).await.unwrap();

        assert_eq!(questions.len(), 1);
        assert!(questions.contains(&capital_of_france()));
    }

    #[tokio::test]
    async fn test_delete_question() {
        let mut repo = MockQuestionRepo::new();
        repo.expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        let service = QuestionManager::new(Arc::new(repo));

        assert!(service.delete_by_id(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_required_question() {
        let mut repo = MockQuestionRepo::new();
        repo.expect_get_one()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(capital_of_france()));
        repo.expect_find_by_id().never();

        let service = QuestionManager::new(Arc::new(repo));
        let found = service.get_required(1).await.unwrap();

        assert_eq!(found.content, "What is the capital of France?");
    }

    #[tokio::test]
    async fn test_get_required_missing_question_fails() {
        let mut repo = MockQuestionRepo::new();
        repo.expect_get_one()
            .returning(|_| Err(AppError::not_found("question")));

        let service = QuestionManager::new(Arc::new(repo));
        let result = service.get_required(99).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_for_attempt_limits_and_hides_answers() {
        let mut repo = MockQuestionRepo::new();
        repo.expect_find_by_exam().returning(|_| {
            Ok(vec![
                question(1, "Capital of France?", "Paris"),
                question(2, "Capital of Spain?", "Madrid"),
                question(3, "Capital of Germany?", "Berlin"),
            ])
        });

        let service = QuestionManager::new(Arc::new(repo));
        let served = service.list_for_attempt(&exam()).await.unwrap();

        assert_eq!(served.len(), 2);
        assert_eq!(served[0].id, Some(1));
        assert_eq!(served[1].id, Some(2));
        assert!(served.iter().all(|q| q.answer.is_empty()));
    }

    #[tokio::test]
    async fn test_evaluate() {
        let mut repo = MockQuestionRepo::new();
        repo.expect_find_by_exam().returning(|_| {
            Ok(vec![
                question(1, "Capital of France?", "Paris"),
                question(2, "Capital of Spain?", "Madrid"),
            ])
        });

        let service = QuestionManager::new(Arc::new(repo));
        let answers = HashMap::from([(1, "Paris".to_string()), (2, "Berlin".to_string())]);
        let evaluation = service.evaluate(&exam(), &answers).await.unwrap();

        assert_eq!(evaluation.attempted, 2);
        assert_eq!(evaluation.correct, 1);
        assert_eq!(evaluation.points, 10.0);
    }
}
