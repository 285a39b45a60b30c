//! Display-formatted price strings.
//!
//! Catalog prices reach the cart as display strings captured at add time
//! ("₹1,299.00", "$50.50"). The string is the stored value; arithmetic
//! parses it to a [`Decimal`] on demand.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A display-formatted price captured from the catalog.
///
/// The inner string is kept verbatim, currency symbol and all. Use
/// [`DisplayPrice::amount`] to obtain a numeric value for aggregate
/// computations; formatting characters are stripped before parsing.
///
/// ## Examples
///
/// ```
/// use basket_core::DisplayPrice;
///
/// let price = DisplayPrice::new("₹1,299.00");
/// assert_eq!(price.as_str(), "₹1,299.00");
/// assert_eq!(price.amount(), "1299.00".parse().ok());
///
/// // A string with no parseable amount yields None, not an error.
/// assert_eq!(DisplayPrice::new("N/A").amount(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayPrice(String);

impl DisplayPrice {
    /// Create a display price from a formatted string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the display string as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `DisplayPrice` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parse the numeric amount out of the display string.
    ///
    /// Strips every character other than ASCII digits, the decimal point,
    /// and minus signs (currency symbols, thousands separators,
    /// whitespace), then parses the remainder as a decimal. Returns
    /// `None` when nothing parseable remains.
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        let cleaned: String = self
            .0
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        cleaned.parse().ok()
    }
}

impl fmt::Display for DisplayPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DisplayPrice {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for DisplayPrice {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for DisplayPrice {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_amount_plain_number() {
        assert_eq!(DisplayPrice::new("100").amount(), Some(dec("100")));
        assert_eq!(DisplayPrice::new("50.50").amount(), Some(dec("50.50")));
    }

    #[test]
    fn test_amount_strips_currency_symbols() {
        assert_eq!(DisplayPrice::new("$18.50").amount(), Some(dec("18.50")));
        assert_eq!(DisplayPrice::new("₹100").amount(), Some(dec("100")));
        assert_eq!(DisplayPrice::new("€9.99").amount(), Some(dec("9.99")));
    }

    #[test]
    fn test_amount_strips_thousands_separators() {
        assert_eq!(
            DisplayPrice::new("₹1,299.00").amount(),
            Some(dec("1299.00"))
        );
        assert_eq!(
            DisplayPrice::new("$12,345,678.90").amount(),
            Some(dec("12345678.90"))
        );
    }

    #[test]
    fn test_amount_strips_whitespace_and_codes() {
        assert_eq!(DisplayPrice::new("USD 42.00").amount(), Some(dec("42.00")));
        assert_eq!(DisplayPrice::new(" 7.25 ").amount(), Some(dec("7.25")));
    }

    #[test]
    fn test_amount_negative() {
        assert_eq!(DisplayPrice::new("-$5.00").amount(), Some(dec("-5.00")));
    }

    #[test]
    fn test_amount_unparseable() {
        assert_eq!(DisplayPrice::new("N/A").amount(), None);
        assert_eq!(DisplayPrice::new("free").amount(), None);
        assert_eq!(DisplayPrice::new("").amount(), None);
        assert_eq!(DisplayPrice::new("$").amount(), None);
    }

    #[test]
    fn test_amount_malformed_number() {
        // Two decimal points survive stripping but do not parse.
        assert_eq!(DisplayPrice::new("1.2.3").amount(), None);
    }

    #[test]
    fn test_display_preserves_formatting() {
        let price = DisplayPrice::new("₹1,299.00");
        assert_eq!(format!("{price}"), "₹1,299.00");
    }

    #[test]
    fn test_serde_transparent() {
        let price = DisplayPrice::new("$18.50");
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"$18.50\"");

        let parsed: DisplayPrice = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
