//! Shared cart handle for UI trees.
//!
//! A UI constructs one [`CartStore`] for the session, wraps it in a
//! [`CartHandle`], and passes clones of the handle down its tree; every
//! clone refers to the same underlying store. The handle is
//! single-threaded (`Rc`-based), matching the cart's single-writer
//! model.

use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal::Decimal;

use basket_core::{ProductId, VariantLabel};

use crate::line_item::{LineItem, NewLineItem};
use crate::store::{CartStore, SubscriptionId};

/// Cheaply cloneable handle to a shared [`CartStore`].
///
/// Subscription callbacks run while the store is borrowed; a callback
/// must not call back into the handle.
#[derive(Clone)]
pub struct CartHandle {
    inner: Rc<RefCell<CartStore>>,
}

impl CartHandle {
    /// Wrap a store in a shared handle.
    #[must_use]
    pub fn new(store: CartStore) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    /// Add one unit of a product to the cart.
    pub fn add_item(&self, item: NewLineItem) {
        self.inner.borrow_mut().add_item(item);
    }

    /// Remove the entry with the given identity.
    pub fn remove_item(&self, product_id: &ProductId, variant: Option<&VariantLabel>) {
        self.inner.borrow_mut().remove_item(product_id, variant);
    }

    /// Set the quantity of the entry with the given identity; 0 removes.
    pub fn set_quantity(
        &self,
        product_id: &ProductId,
        quantity: u32,
        variant: Option<&VariantLabel>,
    ) {
        self.inner
            .borrow_mut()
            .set_quantity(product_id, quantity, variant);
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.inner.borrow().total_item_count()
    }

    /// Sum of parsed unit price times quantity across all entries.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.inner.borrow().total_price()
    }

    /// Snapshot of the current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<LineItem> {
        self.inner.borrow().items().to_vec()
    }

    /// Number of distinct entries in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Quantity of the entry with the given identity, 0 when absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: &ProductId, variant: Option<&VariantLabel>) -> u32 {
        self.inner.borrow().quantity_of(product_id, variant)
    }

    /// Register a callback invoked after every mutation.
    pub fn subscribe(&self, callback: impl FnMut(&[LineItem]) + 'static) -> SubscriptionId {
        self.inner.borrow_mut().subscribe(callback)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().unsubscribe(id)
    }
}
