//! Cart line items and their identity.
//!
//! A line item is one (product, variant) entry with a quantity. The
//! display fields are snapshots captured when the item is first added;
//! later adds of the same identity only increment the quantity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use basket_core::{DisplayPrice, ProductId, VariantLabel};

/// One purchasable entry in the cart.
///
/// Serializes to the persisted wire shape: `id`, `name`, `price`,
/// `quantity`, plus optional `image`, `variant`, and `originalPrice`
/// fields that are omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier from the catalog.
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// Display name captured at add time.
    pub name: String,
    /// Display-formatted unit price captured at add time.
    #[serde(rename = "price")]
    pub unit_price: DisplayPrice,
    /// Number of units; always >= 1 for a stored item.
    pub quantity: u32,
    /// Display image reference, if the catalog provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Variant label; `None` means the product's default variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<VariantLabel>,
    /// Pre-discount unit price, if the catalog provided one.
    #[serde(
        default,
        rename = "originalPrice",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_unit_price: Option<DisplayPrice>,
}

impl LineItem {
    /// The identity key for this entry.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product_id.clone(), self.variant.clone())
    }

    /// Whether this entry matches the given identity.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, variant: Option<&VariantLabel>) -> bool {
        &self.product_id == product_id && self.variant.as_ref() == variant
    }

    /// Parsed unit price.
    ///
    /// `None` when the display string holds no parseable amount.
    #[must_use]
    pub fn unit_amount(&self) -> Option<Decimal> {
        self.unit_price.amount()
    }

    /// Parsed unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_amount()
            .map(|amount| amount * Decimal::from(self.quantity))
    }
}

/// Identity key for a cart entry.
///
/// Two add-to-cart actions refer to the same entry exactly when product
/// and variant are both equal. A missing variant is a distinct value,
/// never conflated with an empty-string label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    /// Product identifier.
    pub product_id: ProductId,
    /// Variant label, `None` for the default variant.
    pub variant: Option<VariantLabel>,
}

impl LineKey {
    /// Create an identity key.
    #[must_use]
    pub const fn new(product_id: ProductId, variant: Option<VariantLabel>) -> Self {
        Self {
            product_id,
            variant,
        }
    }
}

/// Catalog data supplied when a product is added to the cart.
///
/// Quantity is not part of the input: an add always contributes one unit.
#[derive(Debug, Clone)]
pub struct NewLineItem {
    /// Product identifier.
    pub product_id: ProductId,
    /// Display name.
    pub name: String,
    /// Display-formatted unit price.
    pub unit_price: DisplayPrice,
    /// Display image reference.
    pub image: Option<String>,
    /// Variant label.
    pub variant: Option<VariantLabel>,
    /// Pre-discount unit price.
    pub original_unit_price: Option<DisplayPrice>,
}

impl NewLineItem {
    /// Create an item from the required catalog fields.
    #[must_use]
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: impl Into<DisplayPrice>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            unit_price: unit_price.into(),
            image: None,
            variant: None,
            original_unit_price: None,
        }
    }

    /// Attach a variant label.
    #[must_use]
    pub fn variant(mut self, variant: impl Into<VariantLabel>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Attach a display image reference.
    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Attach a pre-discount unit price.
    #[must_use]
    pub fn original_unit_price(mut self, price: impl Into<DisplayPrice>) -> Self {
        self.original_unit_price = Some(price.into());
        self
    }
}

impl From<NewLineItem> for LineItem {
    fn from(new: NewLineItem) -> Self {
        Self {
            product_id: new.product_id,
            name: new.name,
            unit_price: new.unit_price,
            quantity: 1,
            image: new.image,
            variant: new.variant,
            original_unit_price: new.original_unit_price,
        }
    }
}
