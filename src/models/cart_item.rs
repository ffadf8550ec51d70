//! Cart line item model.
//!
//! This module defines the [`CartItem`] struct, a single priced line in a
//! shopping cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

fn default_quantity() -> u32 {
    1
}

/// A single line item in a shopping cart.
///
/// Items are read-only inputs to the calculation functions; nothing in the
/// engine mutates them.
///
/// # Examples
///
/// ```
/// use cart_totals::models::CartItem;
/// use rust_decimal::Decimal;
///
/// let item: CartItem = serde_json::from_str(r#"{ "price": "19.99" }"#).unwrap();
/// assert_eq!(item.price, Decimal::new(1999, 2));
/// assert_eq!(item.quantity, 1);
/// assert!(!item.is_tax_exempt);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The unit price of the item.
    pub price: Decimal,
    /// How many units are in the cart. Defaults to 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Whether the item is excluded from the tax base. Defaults to false.
    #[serde(default)]
    pub is_tax_exempt: bool,
}

impl CartItem {
    /// Creates a taxable item with the given price and quantity.
    pub fn new(price: Decimal, quantity: u32) -> Self {
        Self {
            price,
            quantity,
            is_tax_exempt: false,
        }
    }

    /// Creates a tax-exempt item with the given price and quantity.
    pub fn tax_exempt(price: Decimal, quantity: u32) -> Self {
        Self {
            price,
            quantity,
            is_tax_exempt: true,
        }
    }

    /// Returns `price * quantity` for this line.
    ///
    /// Fails with `AmountOutOfRange` when the product does not fit in a
    /// `Decimal`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cart_totals::models::CartItem;
    /// use rust_decimal::Decimal;
    ///
    /// let item = CartItem::new(Decimal::new(1250, 2), 3);
    /// assert_eq!(item.line_total().unwrap(), Decimal::new(3750, 2));
    /// ```
    pub fn line_total(&self) -> EngineResult<Decimal> {
        self.price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| EngineError::out_of_range("line total"))
    }
}
