//! Role database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

use domain::Role;

/// Role ids are chosen by the application, so the key is not generated.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_role::Entity")]
    UserRole,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Role {
    fn from(model: Model) -> Self {
        Role {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<Role> for ActiveModel {
    fn from(role: Role) -> Self {
        Self {
            id: Set(role.id),
            name: Set(role.name),
        }
    }
}
