//! The store: a single SQLite connection to the PocketBase data file.
//!
//! Every mutating method runs exactly one statement inside its own
//! transaction and commits before returning. Nothing is batched, so a
//! failure part-way through a repair leaves the earlier steps applied.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{ProductRow, Table, TableCounts};

/// Store path used when none is given.
pub const DEFAULT_DB_PATH: &str = "pb_data/data.db";

/// An open store.
///
/// Obtain one with [`Store::open`] and release it with [`Store::close`].
pub struct Store {
    conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Open an existing store for reading and writing.
    ///
    /// The file is never created: a missing path is [`Error::NotFound`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotFound(path.display().to_string()));
        }
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)?;
        debug!(path = %path.display(), "opened store");
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of rows in `table`.
    pub fn count(&self, table: Table) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        self.scalar(&sql)
    }

    /// Row counts of all three tables.
    pub fn counts(&self) -> Result<TableCounts> {
        Ok(TableCounts {
            products: self.count(Table::Products)?,
            orders: self.count(Table::Orders)?,
            order_items: self.count(Table::OrderItems)?,
        })
    }

    /// All `(id, name)` pairs in `products`, in storage order.
    pub fn products(&self) -> Result<Vec<ProductRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT CAST(id AS TEXT), COALESCE(name, '') FROM products")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ProductRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Order items holding a product reference.
    pub fn referencing_items(&self) -> Result<u64> {
        self.scalar(
            "SELECT COUNT(*) FROM order_items WHERE product IS NOT NULL AND product != ''",
        )
    }

    /// Order items whose referenced product is not in `products`.
    pub fn dangling_refs(&self) -> Result<u64> {
        self.scalar(
            "SELECT COUNT(*) FROM order_items \
             WHERE product IS NOT NULL AND product != '' \
             AND NOT EXISTS (SELECT 1 FROM products p \
                 WHERE CAST(p.id AS TEXT) = CAST(order_items.product AS TEXT))",
        )
    }

    /// Set every non-null product reference in `order_items` to NULL.
    ///
    /// Returns the number of rows changed.
    pub fn clear_product_refs(&mut self) -> Result<usize> {
        self.commit_step("UPDATE order_items SET product = NULL WHERE product IS NOT NULL")
    }

    /// Delete every row of `table`. Returns the number of rows deleted.
    pub fn delete_all(&mut self, table: Table) -> Result<usize> {
        let sql = format!("DELETE FROM {}", table);
        self.commit_step(&sql)
    }

    /// Delete every row of `table` with an always-true filter.
    ///
    /// Logically the same as [`Store::delete_all`]; used as the second pass
    /// when rows survive the first one.
    pub fn purge(&mut self, table: Table) -> Result<usize> {
        let sql = format!("DELETE FROM {} WHERE 1=1", table);
        self.commit_step(&sql)
    }

    /// Write a compacted copy of the store to `dest`.
    ///
    /// `dest` must not exist yet.
    pub fn backup_to(&self, dest: impl AsRef<Path>) -> Result<()> {
        let dest = dest.as_ref();
        if dest.exists() {
            return Err(Error::Backup(format!("{} already exists", dest.display())));
        }
        let target = dest
            .to_str()
            .ok_or_else(|| Error::Backup(format!("{} is not valid UTF-8", dest.display())))?;
        debug!(dest = %dest.display(), "VACUUM INTO");
        self.conn.execute("VACUUM INTO ?1", [target])?;
        Ok(())
    }

    /// Close the connection, surfacing any error SQLite reports.
    pub fn close(self) -> Result<()> {
        debug!(path = %self.path.display(), "closing store");
        self.conn.close().map_err(|(_, e)| Error::Sqlite(e))
    }

    fn scalar(&self, sql: &str) -> Result<u64> {
        debug!(sql, "query");
        let n: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(n.max(0) as u64)
    }

    fn commit_step(&mut self, sql: &str) -> Result<usize> {
        debug!(sql, "execute");
        let tx = self.conn.transaction()?;
        let changed = tx.execute(sql, [])?;
        tx.commit()?;
        Ok(changed)
    }
}
