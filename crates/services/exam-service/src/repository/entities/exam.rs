//! Exam database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use domain::Exam;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "exams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: String,
    pub max_points: i32,
    pub question_count: i32,
    pub active: bool,
    pub category_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::question::Entity")]
    Question,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Exam {
    fn from(model: Model) -> Self {
        Exam {
            id: Some(model.id),
            title: model.title,
            description: model.description,
            max_points: model.max_points,
            question_count: model.question_count,
            active: model.active,
            category_id: model.category_id,
        }
    }
}

impl From<Exam> for ActiveModel {
    fn from(exam: Exam) -> Self {
        Self {
            id: exam.id.map_or(NotSet, Set),
            title: Set(exam.title),
            description: Set(exam.description),
            max_points: Set(exam.max_points),
            question_count: Set(exam.question_count),
            active: Set(exam.active),
            category_id: Set(exam.category_id),
        }
    }
}
