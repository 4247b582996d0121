use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "Employee")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "EmployeeID")]
    pub id: i32,

    #[sea_orm(column_name = "Name")]
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[sea_orm(column_name = "Position", nullable)]
    pub position: Option<String>,

    #[sea_orm(column_name = "Email", unique)]
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[sea_orm(column_name = "Phone", nullable)]
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::schedule::Entity")]
    Schedules,
}

impl Related<super::schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
