//! Variant A: detach order items from their products, then delete every
//! product.

use std::io::Write;

use tracing::{info, warn};

use crate::console::Console;
use crate::database::Store;
use crate::error::Result;
use crate::types::{SelectiveReport, Table};

pub(super) fn run<W: Write>(store: &mut Store, console: &mut Console<W>) -> Result<SelectiveReport> {
    console.section("1. CHECKING ORDER_ITEMS...")?;
    let order_items = store.count(Table::OrderItems)?;
    console.line(format!("   Found {} order items", order_items))?;

    let mut refs_cleared = 0;
    if order_items > 0 {
        console.line("   Clearing all product references in order_items...")?;
        refs_cleared = store.clear_product_refs()?;
        info!(refs_cleared, "cleared product references");
        console.line("   ✅ Cleared all product references")?;
    }

    console.section("2. CHECKING PRODUCTS...")?;
    let products = store.products()?;
    console.line(format!("   Found {} products:", products.len()))?;
    for product in &products {
        console.line(format!("   - {} ({})", product.name, product.id))?;
    }

    console.section("3. DELETING ALL PRODUCTS...")?;
    let products_deleted = store.delete_all(Table::Products)?;
    info!(products_deleted, "deleted products");
    console.line(format!("   ✅ Deleted {} products", products_deleted))?;

    console.section("4. VERIFYING...")?;
    let products_remaining = store.count(Table::Products)?;
    console.line(format!("   Products remaining: {}", products_remaining))?;

    let mut remaining_after_aggressive = None;
    if products_remaining == 0 {
        console.section("✅ SUCCESS! All products deleted from database!")?;
    } else {
        warn!(products_remaining, "products survived delete");
        console.section(format!(
            "❌ WARNING: {} products still remain",
            products_remaining
        ))?;

        console.section("5. TRYING AGGRESSIVE DELETION...")?;
        store.purge(Table::Products)?;
        let left = store.count(Table::Products)?;
        console.line(format!(
            "   Products remaining after aggressive delete: {}",
            left
        ))?;
        remaining_after_aggressive = Some(left);
    }

    Ok(SelectiveReport {
        order_items,
        refs_cleared,
        products,
        products_deleted,
        products_remaining,
        remaining_after_aggressive,
    })
}
