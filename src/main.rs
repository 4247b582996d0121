use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::error;

use nordicx_reports as api;
use nordicx_reports::queries::{
    CustomerPurchaseHistoryQuery, CustomerSegmentationQuery, CustomersByPurchaseDateQuery,
    EmployeeScheduleQuery, HighValueCustomersQuery, LowStockProductsQuery, Query,
    SuppliersAndProductsQuery, TopSellingProductsQuery, TotalSalesByCategoryQuery,
};
use nordicx_reports::DatabaseAccess;

/// Browse the NordicX store database and run catalog reports.
#[derive(Parser)]
#[command(name = "nordicx-reports", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create and seed the schema when missing; `--force` resets existing data
    Init {
        #[arg(long)]
        force: bool,
    },
    /// List browsable tables
    Tables,
    /// Print the full contents of one table
    Show { table: String },
    /// Run one of the catalog reports
    #[command(subcommand)]
    Report(ReportCommand),
}

#[derive(Subcommand)]
enum ReportCommand {
    /// Distinct customers with orders in a date range (inclusive)
    CustomersByPurchaseDate {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
    /// Products with stock strictly below a threshold
    LowStock {
        #[arg(long)]
        threshold: i32,
    },
    /// One employee's shifts in a date range (inclusive)
    EmployeeSchedule {
        #[arg(long)]
        employee_id: i32,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
    /// Total sales per product category over a date range (inclusive)
    SalesByCategory {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
    /// Every supplier with its products (left join)
    SuppliersProducts,
    /// Purchase history view rows for one customer
    PurchaseHistory {
        #[arg(long)]
        customer_id: i32,
    },
    /// Customers spending above the mean order total
    HighValueCustomers,
    /// Top 3 products by units sold
    TopSelling,
    /// Per-customer order statistics with segment labels
    Segmentation,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let cfg = api::config::load_config().context("failed to load configuration")?;
    api::config::init_tracing(cfg.log_level(), cfg.log_json);

    let pool = api::db::establish_connection_from_app_config(&cfg)
        .await
        .context("failed to connect to the database")?;
    let db = DatabaseAccess::new(Arc::new(pool));

    match cli.command {
        Command::Init { force } => {
            if force {
                api::schema::initialize(&db).await?;
                println!("Database reset and seeded.");
            } else if api::schema::ensure_initialized(&db).await? {
                println!("Database created and seeded.");
            } else {
                println!("Database already initialized.");
            }
        }
        Command::Tables => {
            ensure_schema(&cfg, &db).await?;
            let tables = api::browse::list_tables(&db).await?;
            for table in &tables {
                println!("{table}");
            }
            println!("{} tables", tables.len());
        }
        Command::Show { table } => {
            ensure_schema(&cfg, &db).await?;
            let data = api::browse::fetch_table(&db, &table).await?;
            println!("{}", serde_json::to_string_pretty(&data)?);
            println!("{} rows", data.row_count());
        }
        Command::Report(report) => {
            ensure_schema(&cfg, &db).await?;
            run_report(&db, report).await?;
        }
    }

    Ok(())
}

async fn ensure_schema(
    cfg: &api::config::AppConfig,
    db: &DatabaseAccess,
) -> Result<(), api::AppError> {
    if cfg.auto_init {
        api::schema::ensure_initialized(db).await.map_err(|e| {
            error!("Schema initialization failed: {}", e);
            e
        })?;
    }
    Ok(())
}

async fn run_report(
    db: &DatabaseAccess,
    report: ReportCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match report {
        ReportCommand::CustomersByPurchaseDate { start, end } => {
            print_rows(&CustomersByPurchaseDateQuery { start, end }.execute(db).await?)
        }
        ReportCommand::LowStock { threshold } => {
            print_rows(&LowStockProductsQuery { threshold }.execute(db).await?)
        }
        ReportCommand::EmployeeSchedule {
            employee_id,
            start,
            end,
        } => print_rows(
            &EmployeeScheduleQuery {
                employee_id,
                start,
                end,
            }
            .execute(db)
            .await?,
        ),
        ReportCommand::SalesByCategory { start, end } => {
            print_rows(&TotalSalesByCategoryQuery { start, end }.execute(db).await?)
        }
        ReportCommand::SuppliersProducts => {
            print_rows(&SuppliersAndProductsQuery.execute(db).await?)
        }
        ReportCommand::PurchaseHistory { customer_id } => {
            print_rows(&CustomerPurchaseHistoryQuery { customer_id }.execute(db).await?)
        }
        ReportCommand::HighValueCustomers => {
            print_rows(&HighValueCustomersQuery.execute(db).await?)
        }
        ReportCommand::TopSelling => print_rows(&TopSellingProductsQuery.execute(db).await?),
        ReportCommand::Segmentation => print_rows(&CustomerSegmentationQuery.execute(db).await?),
    }
}

fn print_rows<T: Serialize>(rows: &[T]) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    println!("{} rows", rows.len());
    Ok(())
}
