//! Question entity and attempt grading.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};
use crate::exam::Exam;

/// Multiple choice question with four options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub id: Option<EntityId>,
    pub content: String,
    pub image: Option<String>,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    /// Correct answer, expected to equal one of the options
    pub answer: String,
    pub exam_id: EntityId,
}

impl Question {
    /// The four options in display order
    pub fn options(&self) -> [&str; 4] {
        [&self.option1, &self.option2, &self.option3, &self.option4]
    }

    /// Whether the stored answer matches one of the options.
    ///
    /// Data quality check only; nothing rejects a question that fails it.
    pub fn has_valid_answer(&self) -> bool {
        self.options().contains(&self.answer.as_str())
    }

    /// Copy of the question safe to hand to a student
    pub fn without_answer(&self) -> Self {
        Self {
            answer: String::new(),
            ..self.clone()
        }
    }

    fn is_answered_by(&self, given: &str) -> bool {
        self.answer.trim() == given.trim()
    }
}

impl Entity for Question {
    const NAME: &'static str = "question";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

/// Outcome of grading one attempt at an exam.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Evaluation {
    /// Questions that received a non-empty answer
    pub attempted: u32,
    /// Questions answered correctly
    pub correct: u32,
    /// Points earned
    pub points: f64,
}

impl Evaluation {
    /// Grade `answers` (question id to chosen option) against the stored
    /// questions of `exam`. Answers for questions not in `questions` are ignored.
    pub fn grade(exam: &Exam, questions: &[Question], answers: &HashMap<EntityId, String>) -> Self {
        let mut evaluation = Self::default();

        for question in questions {
            let Some(given) = question.id.and_then(|id| answers.get(&id)) else {
                continue;
            };
            if given.trim().is_empty() {
                continue;
            }

            evaluation.attempted += 1;
            if question.is_answered_by(given) {
                evaluation.correct += 1;
            }
        }

        evaluation.points = f64::from(evaluation.correct) * exam.points_per_question();
        evaluation
    }
}
