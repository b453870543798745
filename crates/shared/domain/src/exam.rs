//! Exam entity.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};

/// An exam belonging to one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exam {
    pub id: Option<EntityId>,
    pub title: String,
    pub description: String,
    /// Points awarded for a perfect attempt
    pub max_points: i32,
    /// Number of questions served per attempt
    pub question_count: i32,
    /// Only active exams are offered to students
    pub active: bool,
    pub category_id: EntityId,
}

impl Exam {
    /// Points earned by each correct answer
    pub fn points_per_question(&self) -> f64 {
        if self.question_count <= 0 {
            return 0.0;
        }
        f64::from(self.max_points) / f64::from(self.question_count)
    }
}

impl Entity for Exam {
    const NAME: &'static str = "exam";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
