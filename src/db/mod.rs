pub mod schema;

use rusqlite::{Connection, Params, Row};
use std::path::Path;
use std::time::Duration;

use crate::error::StoreError;

/// The single connection between the tracker and its store.
///
/// Every statement goes through [`Gateway::query`] or [`Gateway::execute`],
/// which bind parameters positionally. Nothing here builds SQL from input.
pub struct Gateway {
    conn: Connection,
}

/// Result of [`Gateway::check_health`].
#[derive(Debug)]
pub struct HealthReport {
    pub integrity_ok: bool,
    pub integrity_details: String,
    pub department_count: u64,
    pub role_count: u64,
    pub employee_count: u64,
    /// Employees with no manager reference.
    pub unmanaged_count: u64,
}

impl Gateway {
    /// Open (or create) the store at the given path with foreign keys enforced
    /// and the tables in place.
    pub fn open(path: impl AsRef<Path>, busy_timeout_ms: u64) -> Result<Self, StoreError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Directory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        conn.busy_timeout(Duration::from_millis(busy_timeout_ms))?;

        let gateway = Self::prepare(conn)?;
        tracing::info!(path = %path.display(), "store opened");
        Ok(gateway)
    }

    /// Open a private in-memory store.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::Open {
            path: ":memory:".into(),
            source,
        })?;
        Self::prepare(conn)
    }

    fn prepare(conn: Connection) -> Result<Self, StoreError> {
        // The store is the only place references are checked
        conn.pragma_update(None, "foreign_keys", "ON")?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Run a row-returning statement and map every row.
    pub fn query<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>, StoreError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, map)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Run a mutation and return the number of rows it touched.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize, StoreError> {
        Ok(self.conn.execute(sql, params)?)
    }

    /// Id assigned to the most recent successful insert on this connection.
    pub fn last_insert_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }

    /// Read an integer pragma such as `foreign_keys` or `busy_timeout`.
    pub fn pragma_value(&self, name: &str) -> Result<i64, StoreError> {
        Ok(self.conn.pragma_query_value(None, name, |row| row.get(0))?)
    }

    /// Run SQLite's integrity check and count the rows in each table.
    pub fn check_health(&self) -> Result<HealthReport, StoreError> {
        let integrity_details: String =
            self.conn
                .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        Ok(HealthReport {
            integrity_ok: integrity_details == "ok",
            integrity_details,
            department_count: self.count("SELECT COUNT(*) FROM department")?,
            role_count: self.count("SELECT COUNT(*) FROM role")?,
            employee_count: self.count("SELECT COUNT(*) FROM employee")?,
            unmanaged_count: self.count("SELECT COUNT(*) FROM employee WHERE manager_id IS NULL")?,
        })
    }

    fn count(&self, sql: &str) -> Result<u64, StoreError> {
        let n: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(n as u64)
    }
}
