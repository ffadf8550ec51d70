//! Cart totals model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The monetary totals for a cart.
///
/// Every field is rounded to two decimal places. A fresh value is built on
/// each calculation; `CartTotals::default()` is the all-zero empty cart.
///
/// # Example
///
/// ```
/// use cart_totals::models::CartTotals;
/// use rust_decimal::Decimal;
///
/// let totals = CartTotals::default();
/// assert_eq!(totals.total, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of price x quantity before discount and tax.
    pub subtotal: Decimal,
    /// The amount taken off the subtotal by the discount.
    pub discount: Decimal,
    /// Tax charged on the discounted taxable portion.
    pub tax: Decimal,
    /// Discounted subtotal plus tax.
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_is_all_zero() {
        let totals = CartTotals::default();
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.discount, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_serializes_amounts_as_strings() {
        let totals = CartTotals {
            subtotal: dec("20.00"),
            discount: dec("2.00"),
            tax: dec("1.80"),
            total: dec("19.80"),
        };

        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"subtotal\":\"20.00\""));
        assert!(json.contains("\"tax\":\"1.80\""));
        assert!(json.contains("\"total\":\"19.80\""));
    }

    #[test]
    fn test_equality_ignores_trailing_zeros() {
        let a = CartTotals {
            subtotal: dec("20"),
            discount: dec("0"),
            tax: dec("0"),
            total: dec("20"),
        };
        let b = CartTotals {
            subtotal: dec("20.00"),
            discount: dec("0.00"),
            tax: dec("0.00"),
            total: dec("20.00"),
        };
        assert_eq!(a, b);
    }
}
