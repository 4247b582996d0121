use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Customer entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "Customer")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "CustomerID")]
    pub id: i32,

    #[sea_orm(column_name = "Name")]
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[sea_orm(column_name = "Email", unique)]
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[sea_orm(column_name = "Phone", nullable)]
    pub phone: Option<String>,

    #[sea_orm(column_name = "Address", nullable)]
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
