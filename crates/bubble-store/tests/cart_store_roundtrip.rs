//! End-to-end persistence tests against the file backend.

use bubble_commerce::cart::LineItem;
use bubble_commerce::catalog::{Product, Variant};
use bubble_commerce::money::Money;
use bubble_store::{CartStore, FileStorage};

fn sample_item(quantity: i64) -> LineItem {
    let product = Product::new("netflix", "Netflix", "Streaming platform", "streaming");
    let variant = Variant::new("1p1u", "1p1u", "1 bulan", Money::idr(25000), 10);
    LineItem::from_variant(&product, &variant, quantity)
}

fn canva_item(quantity: i64) -> LineItem {
    let product = Product::new("canva", "Canva", "Design platform", "design");
    let variant = Variant::new("private", "Private", "1 bulan", Money::idr(10000), 15);
    LineItem::from_variant(&product, &variant, quantity)
}

#[test]
fn cart_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let item_id = {
        let storage = FileStorage::new(dir.path()).unwrap();
        let mut store = CartStore::open(storage, "session-1");
        let id = store.add_item(sample_item(2)).unwrap();
        store.update_quantity(&id, 3).unwrap();
        id
    };

    let storage = FileStorage::new(dir.path()).unwrap();
    let store = CartStore::open(storage, "session-1");
    assert_eq!(store.total_items(), 3);
    assert_eq!(store.subtotal().unwrap(), Money::idr(75000));
    assert!(store.cart().get_item(&item_id).is_some());
}

#[test]
fn line_order_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let storage = FileStorage::new(dir.path()).unwrap();
        let mut store = CartStore::open(storage, "session-1");
        store.add_item(sample_item(1)).unwrap();
        store.add_item(canva_item(2)).unwrap();
    }

    let storage = FileStorage::new(dir.path()).unwrap();
    let store = CartStore::open(storage, "session-1");

    // Lines come back in insertion order with their quantities intact
    let lines: Vec<(&str, i64)> = store
        .cart()
        .items
        .iter()
        .map(|i| (i.id.as_str(), i.quantity))
        .collect();
    assert_eq!(lines, vec![("netflix:1p1u", 1), ("canva:private", 2)]);
}

#[test]
fn cleared_cart_stays_cleared() {
    let dir = tempfile::tempdir().unwrap();

    {
        let storage = FileStorage::new(dir.path()).unwrap();
        let mut store = CartStore::open(storage, "session-1");
        store.add_item(sample_item(1)).unwrap();
        store.clear();
    }

    let storage = FileStorage::new(dir.path()).unwrap();
    let store = CartStore::open(storage, "session-1");
    assert!(store.cart().is_empty());
}

#[test]
fn stores_with_different_keys_are_independent() {
    let dir = tempfile::tempdir().unwrap();

    {
        let storage = FileStorage::new(dir.path()).unwrap();
        let mut store = CartStore::open_with_key(storage, "session-a", "cart-a");
        store.add_item(sample_item(1)).unwrap();
    }

    let storage = FileStorage::new(dir.path()).unwrap();
    let other = CartStore::open_with_key(storage, "session-b", "cart-b");
    assert!(other.cart().is_empty());
}
