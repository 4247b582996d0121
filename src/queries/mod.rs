//! The report catalog: named, parameterized read queries.
//!
//! Every parameter is passed as a bound value. Date-range filters are
//! inclusive on both bounds; an inverted range is rejected before any SQL
//! runs. An empty result set is a successful outcome, distinct from errors.

pub mod customer_queries;
pub mod product_queries;
pub mod schedule_queries;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::db::DatabaseAccess;
use crate::errors::ServiceError;

pub use customer_queries::{
    CustomerByPurchaseDateRow, CustomerPurchaseHistoryQuery, CustomerSegmentRow,
    CustomerSegmentationQuery, CustomersByPurchaseDateQuery, HighValueCustomerRow,
    HighValueCustomersQuery,
};
pub use product_queries::{
    CategorySalesRow, LowStockProductRow, LowStockProductsQuery, SupplierProductRow,
    SuppliersAndProductsQuery, TopSellingProductRow, TopSellingProductsQuery,
    TotalSalesByCategoryQuery,
};
pub use schedule_queries::{EmployeeScheduleQuery, EmployeeScheduleRow};

/// Trait representing a generic asynchronous query.
#[async_trait]
pub trait Query: Send + Sync {
    type Result: Send + Sync;

    /// Executes the query using the provided database connection
    async fn execute(&self, db: &DatabaseAccess) -> Result<Self::Result, ServiceError>;
}

pub(crate) fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), ServiceError> {
    if end < start {
        return Err(ServiceError::ValidationError(format!(
            "end date {end} precedes start date {start}"
        )));
    }
    Ok(())
}
