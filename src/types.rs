//! Row and report types shared by the store and the repair variants.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Tables the repair touches.
///
/// These are the only identifiers ever interpolated into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    /// `products`
    Products,
    /// `orders`
    Orders,
    /// `order_items`
    OrderItems,
}

impl Table {
    /// SQL table name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Products => "products",
            Table::Orders => "orders",
            Table::OrderItems => "order_items",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(id, name)` pair read from `products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    /// Product id, read as text
    pub id: String,
    /// Product name; empty when NULL
    pub name: String,
}

/// Row counts of the three tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    /// Rows in `products`
    pub products: u64,
    /// Rows in `orders`
    pub orders: u64,
    /// Rows in `order_items`
    pub order_items: u64,
}

impl TableCounts {
    /// True when all three tables are empty.
    pub fn is_empty(&self) -> bool {
        self.products == 0 && self.orders == 0 && self.order_items == 0
    }
}

/// Outcome of the selective fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectiveReport {
    /// `order_items` rows found before any change
    pub order_items: u64,
    /// Product references set to NULL
    pub refs_cleared: usize,
    /// Products present before deletion
    pub products: Vec<ProductRow>,
    /// Rows removed by the first delete
    pub products_deleted: usize,
    /// Products left after the first delete
    pub products_remaining: u64,
    /// Products left after the second delete, if one was needed
    pub remaining_after_aggressive: Option<u64>,
}

/// Outcome of the nuclear fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NuclearReport {
    /// `order_items` rows deleted
    pub order_items_deleted: usize,
    /// `orders` rows deleted
    pub orders_deleted: usize,
    /// `products` rows deleted
    pub products_deleted: usize,
    /// Counts taken after all deletes
    pub remaining: TableCounts,
}

/// Read-only health check of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    /// Current row counts
    pub counts: TableCounts,
    /// Order items holding a product reference
    pub referencing_items: u64,
    /// Order items whose product no longer exists
    pub dangling_refs: u64,
}

/// Per-variant detail of a [`RepairReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum ReportDetails {
    /// Variant A
    Selective(SelectiveReport),
    /// Variant B
    Nuclear(NuclearReport),
    /// Read-only inspection
    Inspect(InspectReport),
}

/// Structured result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairReport {
    /// Store that was repaired
    pub database: PathBuf,
    /// Backup taken before the first step, if requested
    pub backup: Option<PathBuf>,
    /// What the variant did
    #[serde(flatten)]
    pub details: ReportDetails,
}
