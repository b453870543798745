//! Question database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use domain::Question;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub image: Option<String>,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub answer: String,
    pub exam_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exam::Entity",
        from = "Column::ExamId",
        to = "super::exam::Column::Id"
    )]
    Exam,
}

impl Related<super::exam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Question {
    fn from(model: Model) -> Self {
        Question {
            id: Some(model.id),
            content: model.content,
            image: model.image,
            option1: model.option1,
            option2: model.option2,
            option3: model.option3,
            option4: model.option4,
            answer: model.answer,
            exam_id: model.exam_id,
        }
    }
}

impl From<Question> for ActiveModel {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.map_or(NotSet, Set),
            content: Set(question.content),
            image: Set(question.image),
            option1: Set(question.option1),
            option2: Set(question.option2),
            option3: Set(question.option3),
            option4: Set(question.option4),
            answer: Set(question.answer),
            exam_id: Set(question.exam_id),
        }
    }
}
