use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product entity
///
/// `Price` and `StockLevel` carry CHECK constraints in the schema; inserts
/// violating them fail at the store, they are never clamped here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate)]
#[sea_orm(table_name = "Product")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ProductID")]
    pub id: i32,

    #[sea_orm(column_name = "SupplierID")]
    pub supplier_id: i32,

    #[sea_orm(column_name = "Name")]
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[sea_orm(column_name = "Description", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_name = "Price")]
    pub price: Decimal,

    #[sea_orm(column_name = "StockLevel")]
    pub stock_level: i32,

    #[sea_orm(column_name = "Category", nullable)]
    pub category: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier::Entity",
        from = "Column::SupplierId",
        to = "super::supplier::Column::Id"
    )]
    Supplier,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supplier.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
