use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DbBackend, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Statement,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::db::DatabaseAccess;
use crate::entities::{customer, customer_purchase_history, order};
use crate::errors::ServiceError;

use super::{validate_date_range, Query};

/// Distinct customers with at least one order in an inclusive date range,
/// ordered by order date.
#[derive(Debug, Serialize, Deserialize)]
pub struct CustomersByPurchaseDateQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct CustomerByPurchaseDateRow {
    pub customer_id: i32,
    pub name: String,
    pub email: String,
    pub order_date: NaiveDate,
}

#[async_trait]
impl Query for CustomersByPurchaseDateQuery {
    type Result = Vec<CustomerByPurchaseDateRow>;

    #[instrument(skip(self, db), fields(start = %self.start, end = %self.end))]
    async fn execute(&self, db: &DatabaseAccess) -> Result<Self::Result, ServiceError> {
        validate_date_range(self.start, self.end)?;
        debug!("Executing CustomersByPurchaseDateQuery");

        customer::Entity::find()
            .select_only()
            .column_as(customer::Column::Id, "customer_id")
            .column_as(customer::Column::Name, "name")
            .column_as(customer::Column::Email, "email")
            .column_as(order::Column::OrderDate, "order_date")
            .distinct()
            .join(JoinType::InnerJoin, customer::Relation::Orders.def())
            .filter(order::Column::OrderDate.between(self.start, self.end))
            .order_by_asc(order::Column::OrderDate)
            .into_model::<CustomerByPurchaseDateRow>()
            .all(db.get_pool())
            .await
            .map_err(ServiceError::DatabaseError)
    }
}

/// Rows from the `CustomerPurchaseHistory` view for one customer, ordered by
/// order date.
#[derive(Debug, Serialize, Deserialize)]
pub struct CustomerPurchaseHistoryQuery {
    pub customer_id: i32,
}

#[async_trait]
impl Query for CustomerPurchaseHistoryQuery {
    type Result = Vec<customer_purchase_history::Model>;

    #[instrument(skip(self, db), fields(customer_id = self.customer_id))]
    async fn execute(&self, db: &DatabaseAccess) -> Result<Self::Result, ServiceError> {
        debug!("Executing CustomerPurchaseHistoryQuery");

        customer_purchase_history::Entity::find()
            .filter(customer_purchase_history::Column::CustomerId.eq(self.customer_id))
            .order_by_asc(customer_purchase_history::Column::OrderDate)
            .all(db.get_pool())
            .await
            .map_err(ServiceError::DatabaseError)
    }
}

/// Customers whose summed order totals exceed the mean order total across
/// all orders, descending by spend.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HighValueCustomersQuery;

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct HighValueCustomerRow {
    pub customer_id: i32,
    pub name: String,
    pub total_spent: f64,
}

#[async_trait]
impl Query for HighValueCustomersQuery {
    type Result = Vec<HighValueCustomerRow>;

    #[instrument(skip(self, db))]
    async fn execute(&self, db: &DatabaseAccess) -> Result<Self::Result, ServiceError> {
        debug!("Executing HighValueCustomersQuery");

        let stmt = Statement::from_string(
            DbBackend::Sqlite,
            r#"SELECT c."CustomerID" AS "customer_id", c."Name" AS "name",
                      SUM(o."TotalAmount") AS "total_spent"
               FROM "Customer" c
               JOIN "Order" o ON c."CustomerID" = o."CustomerID"
               GROUP BY c."CustomerID", c."Name"
               HAVING SUM(o."TotalAmount") > (SELECT AVG("TotalAmount") FROM "Order")
               ORDER BY "total_spent" DESC"#
                .to_string(),
        );

        HighValueCustomerRow::find_by_statement(stmt)
            .all(db.get_pool())
            .await
            .map_err(ServiceError::DatabaseError)
    }
}

/// Per-customer order statistics with a derived segment label, descending by
/// lifetime value. Customers without orders still appear ("No Orders").
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CustomerSegmentationQuery;

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct CustomerSegmentRow {
    pub customer_id: i32,
    pub customer_name: String,
    pub email: String,
    pub total_orders: i64,
    pub all_time_value: f64,
    pub average_order_value: f64,
    pub first_purchase: Option<NaiveDate>,
    pub last_purchase: Option<NaiveDate>,
    pub customer_segment: String,
}

#[async_trait]
impl Query for CustomerSegmentationQuery {
    type Result = Vec<CustomerSegmentRow>;

    #[instrument(skip(self, db))]
    async fn execute(&self, db: &DatabaseAccess) -> Result<Self::Result, ServiceError> {
        debug!("Executing CustomerSegmentationQuery");

        let stmt = Statement::from_string(
            DbBackend::Sqlite,
            r#"SELECT c."CustomerID" AS "customer_id", c."Name" AS "customer_name",
                      c."Email" AS "email",
                      COUNT(o."OrderID") AS "total_orders",
                      COALESCE(SUM(o."TotalAmount"), 0.0) AS "all_time_value",
                      ROUND(COALESCE(AVG(o."TotalAmount"), 0.0), 2) AS "average_order_value",
                      MIN(o."OrderDate") AS "first_purchase",
                      MAX(o."OrderDate") AS "last_purchase",
                      CASE
                          WHEN COUNT(o."OrderID") >= 3 THEN 'VIP Customer'
                          WHEN COUNT(o."OrderID") = 2 THEN 'Regular Customer'
                          WHEN COUNT(o."OrderID") = 1 THEN 'New Customer'
                          ELSE 'No Orders'
                      END AS "customer_segment"
               FROM "Customer" c
               LEFT JOIN "Order" o ON c."CustomerID" = o."CustomerID"
               GROUP BY c."CustomerID", c."Name", c."Email"
               ORDER BY "all_time_value" DESC"#
                .to_string(),
        );

        CustomerSegmentRow::find_by_statement(stmt)
            .all(db.get_pool())
            .await
            .map_err(ServiceError::DatabaseError)
    }
}
