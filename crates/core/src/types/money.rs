//! Monetary value types backed by decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency code used when the upstream record carries none.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Monetary amount with currency code.
///
/// The amount is always a well-formed finite decimal, never a raw string:
/// the normalization layer parses mixed string/number encodings before a
/// `Money` is ever constructed. The currency code is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount in the currency's standard unit (dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Money {
    /// Create a new money value.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: String) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Zero in the default currency.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Decimal::ZERO, DEFAULT_CURRENCY.to_string())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Price range for a product.
///
/// Only the minimum variant price is surfaced; the storefront renders
/// "from $X" pricing and never needs the maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PriceRange {
    /// Minimum price among all variants.
    pub min_variant_price: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_money_defaults() {
        let money = Money::zero();
        assert_eq!(money.amount, Decimal::ZERO);
        assert_eq!(money.currency_code, "USD");
        assert_eq!(money, Money::default());
    }

    #[test]
    fn test_money_serializes_amount_as_string() {
        // The serde-with-str feature keeps decimal precision on the wire.
        let money = Money::new(Decimal::new(24900, 2), "USD".to_string());
        let json = serde_json::to_value(&money).expect("serialize");
        assert_eq!(json["amount"], serde_json::json!("249.00"));
        assert_eq!(json["currency_code"], serde_json::json!("USD"));
    }
}
