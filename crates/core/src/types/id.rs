//! Newtype identifiers for catalog references.
//!
//! Product and variant identifiers arrive from the catalog as opaque
//! strings. The `define_id!` macro wraps them in distinct types so a
//! variant label can never be passed where a product identifier is
//! expected.

/// Macro to define a type-safe string identifier wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>`, `From<String>`, and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use basket_core::define_id;
/// define_id!(SkuCode);
/// define_id!(CollectionHandle);
///
/// let sku = SkuCode::new("ESP-1KG");
/// let handle = CollectionHandle::new("coffee");
///
/// // These are different types, so this won't compile:
/// // let _: SkuCode = handle;
/// # assert_eq!(sku.as_str(), "ESP-1KG");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Catalog identifiers used by the cart.
define_id!(ProductId);
define_id!(VariantLabel);
