//! Schema definition and seed initializer.
//!
//! The store is reset by dropping and recreating the full table set, so
//! re-running [`initialize`] is the documented way to discard prior state.
//! [`ensure_initialized`] is the idempotent entry point used at startup: it
//! probes `sqlite_master` for the table set instead of keeping any
//! process-global "initialized" flag.

mod seed;

pub use seed::{
    CUSTOMER_ROWS, EMPLOYEE_ROWS, ORDER_ITEM_ROWS, ORDER_ROWS, PRODUCT_ROWS, SCHEDULE_ROWS,
    SUPPLIER_ROWS,
};

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DbBackend, DbErr, Statement};
use tracing::{info, instrument};

use crate::db::DatabaseAccess;
use crate::errors::AppError;

/// User tables, parents before children.
pub const TABLE_NAMES: [&str; 7] = [
    "Customer",
    "Supplier",
    "Product",
    "Order",
    "OrderItem",
    "Employee",
    "Schedule",
];

pub const VIEW_NAME: &str = "CustomerPurchaseHistory";

/// Drop order: children before parents, so no FK is ever left dangling
/// mid-reset.
const DROP_STATEMENTS: [&str; 8] = [
    r#"DROP VIEW IF EXISTS "CustomerPurchaseHistory";"#,
    r#"DROP TABLE IF EXISTS "Schedule";"#,
    r#"DROP TABLE IF EXISTS "Employee";"#,
    r#"DROP TABLE IF EXISTS "OrderItem";"#,
    r#"DROP TABLE IF EXISTS "Order";"#,
    r#"DROP TABLE IF EXISTS "Product";"#,
    r#"DROP TABLE IF EXISTS "Supplier";"#,
    r#"DROP TABLE IF EXISTS "Customer";"#,
];

const CREATE_STATEMENTS: [&str; 7] = [
    r#"CREATE TABLE "Customer" (
        "CustomerID" INTEGER PRIMARY KEY AUTOINCREMENT,
        "Name" VARCHAR(100) NOT NULL,
        "Email" VARCHAR(50) UNIQUE NOT NULL,
        "Phone" VARCHAR(30),
        "Address" TEXT
    );"#,
    r#"CREATE TABLE "Supplier" (
        "SupplierID" INTEGER PRIMARY KEY AUTOINCREMENT,
        "Name" VARCHAR(100) NOT NULL,
        "ContactInfo" VARCHAR(150),
        "Address" TEXT
    );"#,
    r#"CREATE TABLE "Product" (
        "ProductID" INTEGER PRIMARY KEY AUTOINCREMENT,
        "SupplierID" INT NOT NULL,
        "Name" VARCHAR(100) NOT NULL,
        "Description" TEXT,
        "Price" DECIMAL(10, 2) NOT NULL CHECK ("Price" >= 0),
        "StockLevel" INT NOT NULL DEFAULT 0 CHECK ("StockLevel" >= 0),
        "Category" VARCHAR(50),
        FOREIGN KEY ("SupplierID") REFERENCES "Supplier"("SupplierID")
            ON DELETE RESTRICT ON UPDATE CASCADE
    );"#,
    r#"CREATE TABLE "Order" (
        "OrderID" INTEGER PRIMARY KEY AUTOINCREMENT,
        "CustomerID" INT NOT NULL,
        "OrderDate" DATE NOT NULL,
        "TotalAmount" DECIMAL(10, 2) NOT NULL CHECK ("TotalAmount" >= 0),
        FOREIGN KEY ("CustomerID") REFERENCES "Customer"("CustomerID")
            ON DELETE RESTRICT ON UPDATE CASCADE
    );"#,
    r#"CREATE TABLE "OrderItem" (
        "OrderItemID" INTEGER PRIMARY KEY AUTOINCREMENT,
        "OrderID" INT NOT NULL,
        "ProductID" INT NOT NULL,
        "Quantity" INT NOT NULL CHECK ("Quantity" > 0),
        "Price" DECIMAL(10, 2) NOT NULL CHECK ("Price" >= 0),
        FOREIGN KEY ("OrderID") REFERENCES "Order"("OrderID")
            ON DELETE CASCADE ON UPDATE CASCADE,
        FOREIGN KEY ("ProductID") REFERENCES "Product"("ProductID")
            ON DELETE RESTRICT ON UPDATE CASCADE
    );"#,
    r#"CREATE TABLE "Employee" (
        "EmployeeID" INTEGER PRIMARY KEY AUTOINCREMENT,
        "Name" VARCHAR(100) NOT NULL,
        "Position" VARCHAR(50),
        "Email" VARCHAR(50) UNIQUE NOT NULL,
        "Phone" VARCHAR(30)
    );"#,
    r#"CREATE TABLE "Schedule" (
        "ScheduleID" INTEGER PRIMARY KEY AUTOINCREMENT,
        "EmployeeID" INT NOT NULL,
        "ScheduleDate" DATE NOT NULL,
        "ShiftDetails" VARCHAR(100),
        FOREIGN KEY ("EmployeeID") REFERENCES "Employee"("EmployeeID")
            ON DELETE CASCADE ON UPDATE CASCADE
    );"#,
];

const CREATE_VIEW: &str = r#"CREATE VIEW "CustomerPurchaseHistory" AS
    SELECT c."CustomerID", c."Name" AS "CustomerName", o."OrderID", o."OrderDate",
           o."TotalAmount"
    FROM "Customer" c
    JOIN "Order" o ON c."CustomerID" = o."CustomerID";"#;

/// Drop and recreate the full schema, then insert the fixed seed dataset
/// and create the purchase-history view.
///
/// Runs inside a single transaction: a failed statement (including a seed
/// row violating a CHECK constraint) rolls the whole reset back and is
/// returned to the caller.
#[instrument(skip(db))]
pub async fn initialize(db: &DatabaseAccess) -> Result<(), AppError> {
    let pool = db.get_pool();

    // SQLite defaults this off per connection; dependent DDL below assumes
    // enforcement. The pragma is a no-op inside a transaction, so it runs
    // first on its own.
    pool.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

    info!("Initializing schema and seed data");

    db.transaction::<_, (), DbErr>(|txn| {
        Box::pin(async move {
            for sql in DROP_STATEMENTS {
                txn.execute_unprepared(sql).await?;
            }
            for sql in CREATE_STATEMENTS {
                txn.execute_unprepared(sql).await?;
            }
            for (table, sql) in seed::statements() {
                tracing::debug!(table, "Inserting seed rows");
                txn.execute_unprepared(sql).await?;
            }
            txn.execute_unprepared(CREATE_VIEW).await?;
            Ok(())
        })
    })
    .await
    .map_err(AppError::DatabaseError)?;

    info!("Schema initialized and seeded");
    Ok(())
}

/// Whether the full table set already exists in the store.
pub async fn is_initialized(db: &DatabaseAccess) -> Result<bool, AppError> {
    let rows = db
        .get_pool()
        .query_all(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'"
                .to_string(),
        ))
        .await?;

    let mut present = HashSet::new();
    for row in rows {
        present.insert(row.try_get::<String>("", "name")?);
    }

    Ok(TABLE_NAMES.iter().all(|t| present.contains(*t)))
}

/// Initialize only when the table set is missing. Returns whether the
/// initializer ran.
pub async fn ensure_initialized(db: &DatabaseAccess) -> Result<bool, AppError> {
    if is_initialized(db).await? {
        info!("Schema already present; skipping initialization");
        return Ok(false);
    }
    initialize(db).await?;
    Ok(true)
}
