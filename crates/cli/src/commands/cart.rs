//! Cart manipulation commands.
//!
//! Each command opens the stored cart, applies one mutation or read, and
//! prints a short result. The cart itself never fails on persistence
//! problems; those surface as WARN logs from the engine.

use basket_cart::{CartStore, JsonFileStorage, NewLineItem};
use basket_core::{ProductId, VariantLabel};

use crate::config::CliConfig;

fn open_store(config: &CliConfig) -> CartStore {
    let storage = JsonFileStorage::new(&config.state_dir);
    CartStore::open_with_namespace(Box::new(storage), config.namespace.clone())
}

/// Add one unit of a product to the cart.
#[allow(clippy::print_stdout)]
pub fn add(config: &CliConfig, item: NewLineItem) {
    let mut store = open_store(config);
    let name = item.name.clone();
    store.add_item(item);
    println!(
        "Added {name} ({count} items in cart)",
        count = store.total_item_count()
    );
}

/// Remove an entry from the cart.
#[allow(clippy::print_stdout)]
pub fn remove(config: &CliConfig, product_id: &str, variant: Option<&str>) {
    let mut store = open_store(config);
    let product_id = ProductId::new(product_id);
    let variant = variant.map(VariantLabel::new);
    store.remove_item(&product_id, variant.as_ref());
    println!(
        "Removed {product_id} ({count} items in cart)",
        count = store.total_item_count()
    );
}

/// Set an entry's quantity; 0 removes the entry.
#[allow(clippy::print_stdout)]
pub fn set_quantity(config: &CliConfig, product_id: &str, quantity: u32, variant: Option<&str>) {
    let mut store = open_store(config);
    let product_id = ProductId::new(product_id);
    let variant = variant.map(VariantLabel::new);
    store.set_quantity(&product_id, quantity, variant.as_ref());
    println!(
        "Quantity of {product_id} is now {qty}",
        qty = store.quantity_of(&product_id, variant.as_ref())
    );
}

/// Empty the cart.
#[allow(clippy::print_stdout)]
pub fn clear(config: &CliConfig) {
    let mut store = open_store(config);
    store.clear();
    println!("Cart cleared");
}

/// Print the cart contents and totals.
#[allow(clippy::print_stdout)]
pub fn show(config: &CliConfig) {
    let store = open_store(config);
    if store.is_empty() {
        println!("Cart is empty");
        return;
    }

    for item in store.items() {
        let variant = item
            .variant
            .as_ref()
            .map(|v| format!(" / {v}"))
            .unwrap_or_default();
        let line_total = item
            .line_total()
            .map_or_else(|| "?".to_owned(), |total| total.to_string());
        println!(
            "{qty:>3} x {name}{variant}  [{id}]  @ {price} = {line_total}",
            qty = item.quantity,
            name = item.name,
            id = item.product_id,
            price = item.unit_price,
        );
    }
    println!("Items: {}", store.total_item_count());
    println!("Total: {}", store.total_price());
}
