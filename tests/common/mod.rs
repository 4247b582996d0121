use std::sync::Arc;

use nordicx_reports::config::AppConfig;
use nordicx_reports::{db, schema, DatabaseAccess};
use tempfile::TempDir;

/// Helper harness for spinning up a seeded SQLite database in a temp
/// directory. Each test gets its own file, so tests stay parallel-safe.
pub struct TestDb {
    pub db: DatabaseAccess,
    _dir: TempDir,
}

impl TestDb {
    /// Construct a fresh database with schema and seed data in place.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db_file = dir.path().join("nordicx_test.db");
        let url = format!("sqlite://{}?mode=rwc", db_file.display());

        let mut cfg = AppConfig::new(url, "test".to_string());
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        let db = DatabaseAccess::new(Arc::new(pool));

        schema::initialize(&db)
            .await
            .expect("failed to initialize schema");

        Self { db, _dir: dir }
    }
}
