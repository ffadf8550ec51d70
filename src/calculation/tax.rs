//! Tax calculation functionality.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult, InvalidArgument};

use super::rounding::round2;

/// Calculates the tax owed on `price` at `tax_rate` percent, rounded to cents.
///
/// Exempt prices owe no tax. Arguments are validated before the exemption is
/// considered, so an exempt call with a negative price still fails.
///
/// # Errors
///
/// Returns [`InvalidArgument`] when, checked in this order:
/// - `price` is negative (`NegativePrice`)
/// - `tax_rate` is negative (`NegativeTaxRate`)
///
/// Returns `AmountOutOfRange` when the tax does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use cart_totals::calculation::calculate_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tax = calculate_tax(Decimal::from(100), Decimal::from_str("8.5").unwrap(), false).unwrap();
/// assert_eq!(tax, Decimal::from_str("8.50").unwrap());
///
/// let exempt = calculate_tax(Decimal::from(100), Decimal::from_str("8.5").unwrap(), true).unwrap();
/// assert_eq!(exempt, Decimal::ZERO);
/// ```
pub fn calculate_tax(price: Decimal, tax_rate: Decimal, is_tax_exempt: bool) -> EngineResult<Decimal> {
    if price < Decimal::ZERO {
        return Err(InvalidArgument::NegativePrice.into());
    }
    if tax_rate < Decimal::ZERO {
        return Err(InvalidArgument::NegativeTaxRate.into());
    }

    if is_tax_exempt {
        return Ok(Decimal::ZERO);
    }

    let tax = price
        .checked_mul(tax_rate / Decimal::ONE_HUNDRED)
        .ok_or_else(|| EngineError::out_of_range("tax"))?;
    Ok(round2(tax))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_calculates_tax_on_price() {
        assert_eq!(calculate_tax(dec("100"), dec("8.5"), false).unwrap(), dec("8.5"));
    }

    #[test]
    fn test_zero_rate_yields_zero_tax() {
        assert_eq!(calculate_tax(dec("50"), dec("0"), false).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_decimal_price_rounds_to_cents() {
        // 19.99 * 10% = 1.999
        assert_eq!(calculate_tax(dec("19.99"), dec("10"), false).unwrap(), dec("2.00"));
    }

    #[test]
    fn test_half_cent_rounds_up() {
        // 0.50 * 5% = 0.025
        assert_eq!(calculate_tax(dec("0.50"), dec("5"), false).unwrap(), dec("0.03"));
    }

    #[test]
    fn test_exempt_item_pays_no_tax() {
        assert_eq!(calculate_tax(dec("100"), dec("8.5"), true).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err = calculate_tax(dec("-10"), dec("8.5"), false).unwrap_err();
        assert_eq!(err.to_string(), "Price cannot be negative");
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let err = calculate_tax(dec("100"), dec("-5"), false).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidArgument(InvalidArgument::NegativeTaxRate)
        ));
        assert_eq!(err.to_string(), "Tax rate cannot be negative");
    }

    #[test]
    fn test_exempt_call_still_validates_arguments() {
        let err = calculate_tax(dec("100"), dec("-5"), true).unwrap_err();
        assert_eq!(err.invalid_argument(), Some(InvalidArgument::NegativeTaxRate));
    }

    #[test]
    fn test_overflowing_tax_is_an_error() {
        let err = calculate_tax(Decimal::MAX, dec("200"), false).unwrap_err();
        assert!(matches!(err, EngineError::AmountOutOfRange { .. }));
        assert_eq!(err.to_string(), "Amount out of range while calculating tax");
    }

    #[test]
    fn test_rate_above_100_is_allowed() {
        assert_eq!(calculate_tax(dec("10"), dec("150"), false).unwrap(), dec("15"));
    }
}
