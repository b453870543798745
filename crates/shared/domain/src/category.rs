//! Exam category.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId};

/// Group of related exams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<EntityId>,
    pub title: String,
    pub description: String,
}

impl Category {
    /// Create an unpersisted category
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Entity for Category {
    const NAME: &'static str = "category";

    fn id(&self) -> Option<EntityId> {
        self.id
    }
}
