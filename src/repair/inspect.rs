use std::io::Write;

use crate::console::Console;
use crate::database::Store;
use crate::error::Result;
use crate::types::InspectReport;

/// Read-only: row counts plus referenced/dangling product references.
pub(super) fn run<W: Write>(store: &Store, console: &mut Console<W>) -> Result<InspectReport> {
    console.section("=== DATABASE INSPECTION ===")?;

    console.section("1. COUNTING ROWS...")?;
    let counts = store.counts()?;
    console.line(format!("   Products: {}", counts.products))?;
    console.line(format!("   Orders: {}", counts.orders))?;
    console.line(format!("   Order items: {}", counts.order_items))?;

    console.section("2. CHECKING PRODUCT REFERENCES...")?;
    let referencing_items = store.referencing_items()?;
    let dangling_refs = store.dangling_refs()?;
    console.line(format!(
        "   Order items referencing a product: {}",
        referencing_items
    ))?;
    console.line(format!("   Dangling references: {}", dangling_refs))?;

    if dangling_refs == 0 {
        console.section("✅ No dangling product references")?;
    } else {
        console.section(format!(
            "❌ WARNING: {} order items reference missing products",
            dangling_refs
        ))?;
    }

    Ok(InspectReport {
        counts,
        referencing_items,
        dangling_refs,
    })
}
