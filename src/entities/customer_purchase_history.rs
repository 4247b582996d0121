use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Read-only entity over the `CustomerPurchaseHistory` view
/// (Customer ⋈ Order). The view is a live join, never inserted into.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "CustomerPurchaseHistory")]
pub struct Model {
    #[sea_orm(column_name = "CustomerID")]
    pub customer_id: i32,

    #[sea_orm(column_name = "CustomerName")]
    pub customer_name: String,

    // One row per order, so the order id is the row identity.
    #[sea_orm(primary_key, auto_increment = false, column_name = "OrderID")]
    pub order_id: i32,

    #[sea_orm(column_name = "OrderDate")]
    pub order_date: NaiveDate,

    #[sea_orm(column_name = "TotalAmount")]
    pub total_amount: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
