//! The cart store.
//!
//! Owns the in-memory line item collection and mirrors it into durable
//! storage on every mutation. All operations are synchronous and
//! infallible from the caller's perspective: persistence problems are
//! logged and the in-memory state remains authoritative.

use rust_decimal::Decimal;
use tracing::warn;

use basket_core::{ProductId, VariantLabel};

use crate::line_item::{LineItem, NewLineItem};
use crate::storage::{CartStorage, MemoryStorage};

/// Storage key the cart is persisted under by default.
pub const DEFAULT_NAMESPACE: &str = "cart";

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&[LineItem])>;

struct Subscriber {
    id: SubscriptionId,
    callback: Callback,
}

/// The cart state engine.
///
/// One explicitly constructed store owns the cart for a session; wrap it
/// in a [`CartHandle`](crate::CartHandle) to share it across a UI tree.
/// Line items keep their insertion order across every mutation and every
/// persistence round-trip.
pub struct CartStore {
    items: Vec<LineItem>,
    storage: Box<dyn CartStorage>,
    namespace: String,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
}

impl CartStore {
    /// Open a cart backed by `storage` under [`DEFAULT_NAMESPACE`].
    #[must_use]
    pub fn open(storage: Box<dyn CartStorage>) -> Self {
        Self::open_with_namespace(storage, DEFAULT_NAMESPACE)
    }

    /// Open a cart stored under a specific namespace key.
    ///
    /// Previously persisted state is restored when present. A value that
    /// fails to deserialize is logged and treated as an empty cart; the
    /// store is always usable after this call.
    #[must_use]
    pub fn open_with_namespace(
        storage: Box<dyn CartStorage>,
        namespace: impl Into<String>,
    ) -> Self {
        let namespace = namespace.into();
        let items = restore(storage.as_ref(), &namespace);
        Self {
            items,
            storage,
            namespace,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Open a cart with no durable backing, for tests and previews.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStorage::new()))
    }

    /// Storage key this cart persists under.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Add one unit of a product to the cart.
    ///
    /// An existing entry with the same (product, variant) identity has
    /// its quantity incremented; every captured display field on the
    /// existing entry is left unchanged (the first snapshot wins). A new
    /// identity is appended at the end with quantity 1.
    pub fn add_item(&mut self, new: NewLineItem) {
        match self
            .items
            .iter_mut()
            .find(|item| item.matches(&new.product_id, new.variant.as_ref()))
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => self.items.push(LineItem::from(new)),
        }
        self.commit();
    }

    /// Remove the entry with the given identity.
    ///
    /// Removing an absent identity is a no-op, not an error.
    pub fn remove_item(&mut self, product_id: &ProductId, variant: Option<&VariantLabel>) {
        self.items.retain(|item| !item.matches(product_id, variant));
        self.commit();
    }

    /// Set the quantity of the entry with the given identity.
    ///
    /// A quantity of 0 removes the entry, identically to
    /// [`remove_item`](Self::remove_item). An absent identity is a
    /// no-op.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
        variant: Option<&VariantLabel>,
    ) {
        if quantity == 0 {
            self.remove_item(product_id, variant);
            return;
        }
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.matches(product_id, variant))
        {
            item.quantity = quantity;
        }
        self.commit();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.commit();
    }

    /// Total number of units across all entries. 0 for an empty cart.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of parsed unit price times quantity across all entries.
    ///
    /// An entry whose price string holds no parseable amount contributes
    /// zero rather than failing the computation. `Decimal::ZERO` for an
    /// empty cart.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.line_total().unwrap_or(Decimal::ZERO))
            .sum()
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct entries in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Quantity of the entry with the given identity, 0 when absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: &ProductId, variant: Option<&VariantLabel>) -> u32 {
        self.items
            .iter()
            .find(|item| item.matches(product_id, variant))
            .map_or(0, |item| item.quantity)
    }

    /// Register a callback invoked with the post-mutation snapshot after
    /// every mutation.
    ///
    /// Callbacks run after the mutation has been persisted. A callback
    /// must not mutate the cart it observes.
    pub fn subscribe(&mut self, callback: impl FnMut(&[LineItem]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a previously registered callback.
    ///
    /// Returns `false` when the subscription was not found.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|sub| sub.id != id);
        self.subscribers.len() < before
    }

    fn commit(&mut self) {
        self.persist();
        self.notify();
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.items) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!(key = %self.namespace, error = %e, "failed to serialize cart; skipping write");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.namespace, &serialized) {
            warn!(key = %self.namespace, error = %e, "failed to persist cart; in-memory state kept");
        }
    }

    fn notify(&mut self) {
        let items = self.items.as_slice();
        for sub in &mut self.subscribers {
            (sub.callback)(items);
        }
    }
}

/// Read and deserialize previously persisted cart state.
///
/// Anything short of a well-formed stored collection yields an empty
/// cart: a read failure, malformed JSON, or entries with a zero
/// quantity (which are dropped individually).
fn restore(storage: &dyn CartStorage, namespace: &str) -> Vec<LineItem> {
    let raw = match storage.get(namespace) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key = namespace, error = %e, "failed to read stored cart; starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<LineItem>>(&raw) {
        Ok(mut items) => {
            let before = items.len();
            items.retain(|item| item.quantity >= 1);
            if items.len() < before {
                warn!(
                    key = namespace,
                    dropped = before - items.len(),
                    "dropped stored entries with zero quantity"
                );
            }
            items
        }
        Err(e) => {
            warn!(key = namespace, error = %e, "stored cart is not valid cart data; starting empty");
            Vec::new()
        }
    }
}
