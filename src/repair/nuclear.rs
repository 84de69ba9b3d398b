//! Variant B: delete order items, orders and products, in that order.

use std::io::Write;

use tracing::{info, warn};

use crate::console::Console;
use crate::database::Store;
use crate::error::Result;
use crate::types::{NuclearReport, Table};

pub(super) fn run<W: Write>(store: &mut Store, console: &mut Console<W>) -> Result<NuclearReport> {
    console.section("=== NUCLEAR DATABASE FIX ===")?;

    console.section("1. DELETING ALL ORDER_ITEMS...")?;
    let order_items_deleted = store.delete_all(Table::OrderItems)?;
    console.line(format!("   Deleted {} order items", order_items_deleted))?;

    console.section("2. DELETING ALL ORDERS...")?;
    let orders_deleted = store.delete_all(Table::Orders)?;
    console.line(format!("   Deleted {} orders", orders_deleted))?;

    console.section("3. DELETING ALL PRODUCTS...")?;
    let products_deleted = store.delete_all(Table::Products)?;
    console.line(format!("   Deleted {} products", products_deleted))?;

    info!(
        order_items_deleted,
        orders_deleted, products_deleted, "nuclear deletes committed"
    );

    console.section("4. FINAL CHECK...")?;
    let remaining = store.counts()?;
    console.line(format!("   Products remaining: {}", remaining.products))?;
    console.line(format!("   Orders remaining: {}", remaining.orders))?;
    console.line(format!("   Order items remaining: {}", remaining.order_items))?;

    if remaining.products == 0 {
        console.section("=== ✅ SUCCESS! DATABASE COMPLETELY CLEANED! ===")?;
        console.line("You can now add fresh products without any issues.")?;
    } else {
        warn!(products = remaining.products, "products survived nuclear delete");
        console.section(format!(
            "❌ WARNING: {} products still remain somehow",
            remaining.products
        ))?;
    }

    Ok(NuclearReport {
        order_items_deleted,
        orders_deleted,
        products_deleted,
        remaining,
    })
}
