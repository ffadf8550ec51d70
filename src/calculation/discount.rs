//! Percentage discount calculation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult, InvalidArgument};

/// Reduces `price` by `discount_percent` percent.
///
/// The result is not rounded; callers that need cents use
/// [`round2`](super::round2).
///
/// # Errors
///
/// Returns [`InvalidArgument`] when, checked in this order:
/// - `price` is negative (`NegativePrice`)
/// - `discount_percent` is negative (`NegativeDiscount`)
/// - `discount_percent` is greater than 100 (`DiscountTooLarge`)
///
/// # Examples
///
/// ```
/// use cart_totals::calculation::apply_discount;
/// use rust_decimal::Decimal;
///
/// let discounted = apply_discount(Decimal::from(100), Decimal::from(10)).unwrap();
/// assert_eq!(discounted, Decimal::from(90));
/// ```
pub fn apply_discount(price: Decimal, discount_percent: Decimal) -> EngineResult<Decimal> {
    if price < Decimal::ZERO {
        return Err(InvalidArgument::NegativePrice.into());
    }
    if discount_percent < Decimal::ZERO {
        return Err(InvalidArgument::NegativeDiscount.into());
    }
    if discount_percent > Decimal::ONE_HUNDRED {
        return Err(InvalidArgument::DiscountTooLarge.into());
    }

    let multiplier = Decimal::ONE - discount_percent / Decimal::ONE_HUNDRED;
    price
        .checked_mul(multiplier)
        .ok_or_else(|| EngineError::out_of_range("discount"))
}
