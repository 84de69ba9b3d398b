//! Variant B: nuclear fix.

use crate::*;

fn populated() -> TestDb {
    let db = TestDb::new();
    db.add_product("p1", "Widget");
    db.add_product("p2", "Gadget");
    db.add_product("p3", "Doohickey");
    db.add_order("o1");
    db.add_order("o2");
    db.add_item("i1", Some("p1"));
    db.add_item("i2", None);
    db.add_item("i3", Some("missing"));
    db.add_item("i4", Some("p3"));
    db
}

#[test]
fn test_empties_all_tables() {
    let db = populated();
    let (result, _) = run_variant(&db, Variant::Nuclear);
    let report = result.unwrap();

    assert_eq!(db.count("products"), 0);
    assert_eq!(db.count("orders"), 0);
    assert_eq!(db.count("order_items"), 0);

    let details = nuclear_details(&report);
    assert_eq!(details.order_items_deleted, 4);
    assert_eq!(details.orders_deleted, 2);
    assert_eq!(details.products_deleted, 3);
    assert!(details.remaining.is_empty());
}

#[test]
fn test_progress_text() {
    let db = populated();
    let (_, text) = run_variant(&db, Variant::Nuclear);

    assert!(text.contains("=== NUCLEAR DATABASE FIX ==="));
    assert!(text.contains("   Deleted 4 order items"));
    assert!(text.contains("   Deleted 2 orders"));
    assert!(text.contains("   Deleted 3 products"));
    assert!(text.contains("   Products remaining: 0"));
    assert!(text.contains("   Orders remaining: 0"));
    assert!(text.contains("   Order items remaining: 0"));
    assert!(text.contains("SUCCESS! DATABASE COMPLETELY CLEANED!"));
    assert!(text.contains("You can now add fresh products without any issues."));

    let items = text.find("1. DELETING ALL ORDER_ITEMS").unwrap();
    let orders = text.find("2. DELETING ALL ORDERS").unwrap();
    let products = text.find("3. DELETING ALL PRODUCTS").unwrap();
    assert!(items < orders && orders < products);
}

#[test]
fn test_idempotent_on_empty_tables() {
    let db = TestDb::new();
    for _ in 0..2 {
        let (result, text) = run_variant(&db, Variant::Nuclear);
        let report = result.unwrap();
        let details = nuclear_details(&report);
        assert_eq!(details.order_items_deleted, 0);
        assert_eq!(details.orders_deleted, 0);
        assert_eq!(details.products_deleted, 0);
        assert!(!text.contains("ERROR"));
    }
}

#[test]
fn test_surviving_products_reported() {
    let db = populated();
    db.exec(
        "CREATE TRIGGER keep_p1 BEFORE DELETE ON products
         WHEN old.id = 'p1'
         BEGIN SELECT RAISE(IGNORE); END;",
    );

    let (result, text) = run_variant(&db, Variant::Nuclear);
    let report = result.unwrap();
    assert_eq!(nuclear_details(&report).remaining.products, 1);
    assert!(text.contains("❌ WARNING: 1 products still remain somehow"));
    assert!(!text.contains("SUCCESS"));
}
