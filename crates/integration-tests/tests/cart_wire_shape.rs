//! The persisted JSON shape.
//!
//! Other clients of the same local store read the cart under its
//! namespace key as an array of `{id, name, price, quantity, image?,
//! variant?, originalPrice?}` objects. These tests pin that shape by
//! inspecting the state file directly.

use basket_cart::{CartStore, DEFAULT_NAMESPACE, JsonFileStorage, NewLineItem};
use serde_json::Value;
use tempfile::TempDir;

fn persisted(dir: &TempDir) -> Value {
    let raw = std::fs::read_to_string(dir.path().join(format!("{DEFAULT_NAMESPACE}.json"))).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn full_entry_uses_wire_field_names() {
    let dir = TempDir::new().unwrap();

    let mut store = CartStore::open(Box::new(JsonFileStorage::new(dir.path())));
    store.add_item(
        NewLineItem::new("prod-espresso", "Espresso Beans", "₹1,299.00")
            .variant("1kg")
            .image("beans.webp")
            .original_unit_price("₹1,499.00"),
    );

    assert_eq!(
        persisted(&dir),
        serde_json::json!([{
            "id": "prod-espresso",
            "name": "Espresso Beans",
            "price": "₹1,299.00",
            "quantity": 1,
            "image": "beans.webp",
            "variant": "1kg",
            "originalPrice": "₹1,499.00",
        }])
    );
}

#[test]
fn minimal_entry_omits_absent_optional_fields() {
    let dir = TempDir::new().unwrap();

    let mut store = CartStore::open(Box::new(JsonFileStorage::new(dir.path())));
    store.add_item(NewLineItem::new("prod-grinder", "Hand Grinder", "$50.50"));

    assert_eq!(
        persisted(&dir),
        serde_json::json!([{
            "id": "prod-grinder",
            "name": "Hand Grinder",
            "price": "$50.50",
            "quantity": 1,
        }])
    );
}

#[test]
fn collection_is_ordered_and_written_whole() {
    let dir = TempDir::new().unwrap();

    let mut store = CartStore::open(Box::new(JsonFileStorage::new(dir.path())));
    store.add_item(NewLineItem::new("prod-a", "A", "$1"));
    store.add_item(NewLineItem::new("prod-b", "B", "$2"));
    store.add_item(NewLineItem::new("prod-a", "A", "$1"));

    let value = persisted(&dir);
    let ids: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["prod-a", "prod-b"]);
    assert_eq!(value[0]["quantity"], 2);
}

#[test]
fn externally_written_wire_data_loads() {
    // A cart written by another client of the same store restores
    // field-for-field.
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(format!("{DEFAULT_NAMESPACE}.json")),
        r#"[{"id":"prod-mug","name":"Stoneware Mug","price":"₹450","quantity":2,"variant":"blue"}]"#,
    )
    .unwrap();

    let store = CartStore::open(Box::new(JsonFileStorage::new(dir.path())));
    assert_eq!(store.len(), 1);
    let item = &store.items()[0];
    assert_eq!(item.name, "Stoneware Mug");
    assert_eq!(item.quantity, 2);
    assert_eq!(
        item.variant.as_ref().map(basket_core::VariantLabel::as_str),
        Some("blue")
    );
    assert_eq!(store.total_price(), "900".parse().unwrap());
}
