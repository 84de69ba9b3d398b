//! Scratch stores for the repair tests.

use std::path::{Path, PathBuf};

use pbrepair::{Console, OutputMode, RepairConfig, RepairReport, Result, Variant};
use rusqlite::Connection;
use tempfile::TempDir;

pub const SCHEMA: &str = "
    CREATE TABLE products (id TEXT PRIMARY KEY, name TEXT);
    CREATE TABLE orders (id TEXT PRIMARY KEY);
    CREATE TABLE order_items (id TEXT PRIMARY KEY, product TEXT);
";

/// A store file inside its own temp directory.
pub struct TestDb {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestDb {
    /// Store with the three tables and no rows.
    pub fn new() -> Self {
        Self::with_schema(SCHEMA)
    }

    /// Store created from arbitrary SQL.
    pub fn with_schema(sql: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.db");
        Connection::open(&path).unwrap().execute_batch(sql).unwrap();
        Self { dir, path }
    }

    /// Path inside the temp dir that does not exist.
    pub fn missing() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pb_data").join("data.db");
        Self { dir, path }
    }

    pub fn exec(&self, sql: &str) {
        Connection::open(&self.path).unwrap().execute_batch(sql).unwrap();
    }

    pub fn add_product(&self, id: &str, name: &str) {
        Connection::open(&self.path)
            .unwrap()
            .execute("INSERT INTO products (id, name) VALUES (?1, ?2)", [id, name])
            .unwrap();
    }

    pub fn add_order(&self, id: &str) {
        Connection::open(&self.path)
            .unwrap()
            .execute("INSERT INTO orders (id) VALUES (?1)", [id])
            .unwrap();
    }

    pub fn add_item(&self, id: &str, product: Option<&str>) {
        Connection::open(&self.path)
            .unwrap()
            .execute(
                "INSERT INTO order_items (id, product) VALUES (?1, ?2)",
                rusqlite::params![id, product],
            )
            .unwrap();
    }

    pub fn count(&self, table: &str) -> i64 {
        Connection::open(&self.path)
            .unwrap()
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
            .unwrap()
    }

    /// `(id, product)` pairs of `order_items`, ordered by id.
    pub fn items(&self) -> Vec<(String, Option<String>)> {
        let conn = Connection::open(&self.path).unwrap();
        let mut stmt = conn
            .prepare("SELECT CAST(id AS TEXT), CAST(product AS TEXT) FROM order_items ORDER BY id")
            .unwrap();
        let rows = stmt
            .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))
            .unwrap()
            .collect::<rusqlite::Result<Vec<_>>>()
            .unwrap();
        rows
    }

    pub fn config(&self) -> RepairConfig {
        RepairConfig::new().path(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Run `variant` with `config`, capturing console output.
pub fn run_variant_with(config: &RepairConfig, variant: Variant) -> (Result<RepairReport>, String) {
    let mut console = Console::new(Vec::new(), config.output_mode());
    let result = pbrepair::run(config, variant, &mut console);
    let text = String::from_utf8(console.into_inner()).unwrap();
    (result, text)
}

/// Run `variant` against `db` with human output.
pub fn run_variant(db: &TestDb, variant: Variant) -> (Result<RepairReport>, String) {
    run_variant_with(&db.config().output(OutputMode::Human), variant)
}

pub fn selective_details(report: &RepairReport) -> &pbrepair::SelectiveReport {
    match &report.details {
        pbrepair::ReportDetails::Selective(r) => r,
        other => panic!("expected selective report, got {:?}", other),
    }
}

pub fn nuclear_details(report: &RepairReport) -> &pbrepair::NuclearReport {
    match &report.details {
        pbrepair::ReportDetails::Nuclear(r) => r,
        other => panic!("expected nuclear report, got {:?}", other),
    }
}

pub fn inspect_details(report: &RepairReport) -> &pbrepair::InspectReport {
    match &report.details {
        pbrepair::ReportDetails::Inspect(r) => r,
        other => panic!("expected inspect report, got {:?}", other),
    }
}
