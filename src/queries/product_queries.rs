use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DbBackend, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Statement,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::db::DatabaseAccess;
use crate::entities::{product, supplier};
use crate::errors::ServiceError;

use super::{validate_date_range, Query};

/// Products whose stock level is strictly below a threshold, with their
/// supplier, ascending by stock level.
#[derive(Debug, Serialize, Deserialize)]
pub struct LowStockProductsQuery {
    pub threshold: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct LowStockProductRow {
    pub product_id: i32,
    pub name: String,
    pub category: Option<String>,
    pub stock_level: i32,
    pub price: f64,
    pub supplier_name: String,
}

#[async_trait]
impl Query for LowStockProductsQuery {
    type Result = Vec<LowStockProductRow>;

    #[instrument(skip(self, db), fields(threshold = self.threshold))]
    async fn execute(&self, db: &DatabaseAccess) -> Result<Self::Result, ServiceError> {
        debug!("Executing LowStockProductsQuery");

        product::Entity::find()
            .select_only()
            .column_as(product::Column::Id, "product_id")
            .column_as(product::Column::Name, "name")
            .column_as(product::Column::Category, "category")
            .column_as(product::Column::StockLevel, "stock_level")
            .column_as(product::Column::Price, "price")
            .column_as(supplier::Column::Name, "supplier_name")
            .join(JoinType::InnerJoin, product::Relation::Supplier.def())
            .filter(product::Column::StockLevel.lt(self.threshold))
            .order_by_asc(product::Column::StockLevel)
            .into_model::<LowStockProductRow>()
            .all(db.get_pool())
            .await
            .map_err(ServiceError::DatabaseError)
    }
}

/// Sum of `quantity * unit price` per product category over orders in an
/// inclusive date range, descending by total. Uses the per-item price at
/// time of sale.
#[derive(Debug, Serialize, Deserialize)]
pub struct TotalSalesByCategoryQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct CategorySalesRow {
    pub category: Option<String>,
    pub total_sales: f64,
}

#[async_trait]
impl Query for TotalSalesByCategoryQuery {
    type Result = Vec<CategorySalesRow>;

    #[instrument(skip(self, db), fields(start = %self.start, end = %self.end))]
    async fn execute(&self, db: &DatabaseAccess) -> Result<Self::Result, ServiceError> {
        validate_date_range(self.start, self.end)?;
        debug!("Executing TotalSalesByCategoryQuery");

        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            r#"SELECT p."Category" AS "category",
                      SUM(oi."Quantity" * oi."Price") AS "total_sales"
               FROM "Order" o
               JOIN "OrderItem" oi ON o."OrderID" = oi."OrderID"
               JOIN "Product" p ON oi."ProductID" = p."ProductID"
               WHERE o."OrderDate" BETWEEN ? AND ?
               GROUP BY p."Category"
               ORDER BY "total_sales" DESC"#,
            [self.start.into(), self.end.into()],
        );

        CategorySalesRow::find_by_statement(stmt)
            .all(db.get_pool())
            .await
            .map_err(ServiceError::DatabaseError)
    }
}

/// Every supplier left-joined to its products; suppliers without products
/// still appear with null product columns. Ordered by supplier then product
/// name.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SuppliersAndProductsQuery;

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct SupplierProductRow {
    pub supplier_id: i32,
    pub supplier_name: String,
    pub contact_info: Option<String>,
    pub address: Option<String>,
    pub product_name: Option<String>,
    pub category: Option<String>,
}

#[async_trait]
impl Query for SuppliersAndProductsQuery {
    type Result = Vec<SupplierProductRow>;

    #[instrument(skip(self, db))]
    async fn execute(&self, db: &DatabaseAccess) -> Result<Self::Result, ServiceError> {
        debug!("Executing SuppliersAndProductsQuery");

        supplier::Entity::find()
            .select_only()
            .column_as(supplier::Column::Id, "supplier_id")
            .column_as(supplier::Column::Name, "supplier_name")
            .column_as(supplier::Column::ContactInfo, "contact_info")
            .column_as(supplier::Column::Address, "address")
            .column_as(product::Column::Name, "product_name")
            .column_as(product::Column::Category, "category")
            .join(JoinType::LeftJoin, supplier::Relation::Products.def())
            .order_by_asc(supplier::Column::Name)
            .order_by_asc(product::Column::Name)
            .into_model::<SupplierProductRow>()
            .all(db.get_pool())
            .await
            .map_err(ServiceError::DatabaseError)
    }
}

/// Top 3 products by total units sold, descending. Ties rank by ascending
/// product id so the output is stable across runs.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TopSellingProductsQuery;

#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct TopSellingProductRow {
    pub product_id: i32,
    pub name: String,
    pub total_units_sold: i64,
}

#[async_trait]
impl Query for TopSellingProductsQuery {
    type Result = Vec<TopSellingProductRow>;

    #[instrument(skip(self, db))]
    async fn execute(&self, db: &DatabaseAccess) -> Result<Self::Result, ServiceError> {
        debug!("Executing TopSellingProductsQuery");

        let stmt = Statement::from_string(
            DbBackend::Sqlite,
            r#"SELECT p."ProductID" AS "product_id", p."Name" AS "name",
                      SUM(oi."Quantity") AS "total_units_sold"
               FROM "Product" p
               JOIN "OrderItem" oi ON p."ProductID" = oi."ProductID"
               GROUP BY p."ProductID", p."Name"
               ORDER BY "total_units_sold" DESC, p."ProductID" ASC
               LIMIT 3"#
                .to_string(),
        );

        TopSellingProductRow::find_by_statement(stmt)
            .all(db.get_pool())
            .await
            .map_err(ServiceError::DatabaseError)
    }
}
