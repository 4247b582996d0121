use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Supplier entity
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Supplier")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "SupplierID")]
    pub id: i32,

    #[sea_orm(column_name = "Name")]
    pub name: String,

    #[sea_orm(column_name = "ContactInfo", nullable)]
    pub contact_info: Option<String>,

    #[sea_orm(column_name = "Address", nullable)]
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
