//! Raw table browsing: list the user tables and fetch one wholesale.
//!
//! Table names are structural identifiers, not bindable values. A requested
//! name is therefore checked against the live [`list_tables`] output before
//! it is ever interpolated into SQL; everything else in the crate binds
//! parameters as values.

use sea_orm::{ConnectionTrait, DbBackend, FromQueryResult, JsonValue, Statement};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::db::DatabaseAccess;
use crate::errors::ServiceError;

/// Full contents of one table: ordered column set plus row sequence.
#[derive(Debug, Clone, Serialize)]
pub struct TableData {
    pub table: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<JsonValue>>,
}

impl TableData {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// List user tables, excluding engine-internal ones (`sqlite_%`).
#[instrument(skip(db))]
pub async fn list_tables(db: &DatabaseAccess) -> Result<Vec<String>, ServiceError> {
    let stmt = Statement::from_string(
        DbBackend::Sqlite,
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'"
            .to_string(),
    );

    let rows = db
        .execute("list_tables", move |pool| async move {
            pool.query_all(stmt).await
        })
        .await?;

    let mut names = Vec::with_capacity(rows.len());
    for row in rows {
        names.push(row.try_get::<String>("", "name")?);
    }
    Ok(names)
}

/// Fetch every row of `table` in column order.
///
/// Unknown names (including anything SQL-shaped) are rejected with
/// `InvalidInput` before any statement is built.
#[instrument(skip(db))]
pub async fn fetch_table(db: &DatabaseAccess, table: &str) -> Result<TableData, ServiceError> {
    let known = list_tables(db).await?;
    if !known.iter().any(|t| t == table) {
        return Err(ServiceError::InvalidInput(format!(
            "unknown table: {table}"
        )));
    }

    // Column order as the engine reports it (ordered by cid).
    let info_stmt = Statement::from_string(
        DbBackend::Sqlite,
        format!(r#"PRAGMA table_info("{table}")"#),
    );
    let info_rows = db
        .execute("table_info", move |pool| async move {
            pool.query_all(info_stmt).await
        })
        .await?;

    let mut columns = Vec::with_capacity(info_rows.len());
    for row in info_rows {
        columns.push(row.try_get::<String>("", "name")?);
    }

    let select_stmt = Statement::from_string(
        DbBackend::Sqlite,
        format!(r#"SELECT * FROM "{table}""#),
    );
    let data_rows = db
        .execute("fetch_table", move |pool| async move {
            pool.query_all(select_stmt).await
        })
        .await?;

    let mut rows = Vec::with_capacity(data_rows.len());
    for row in data_rows {
        let object = JsonValue::from_query_result(&row, "")?;
        let cells = columns
            .iter()
            .map(|col| object.get(col).cloned().unwrap_or(JsonValue::Null))
            .collect();
        rows.push(cells);
    }

    debug!(table, rows = rows.len(), "Fetched table contents");

    Ok(TableData {
        table: table.to_string(),
        columns,
        rows,
    })
}
