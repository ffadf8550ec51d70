//! Cent rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places monetary outputs are rounded to.
pub const CENT_PLACES: u32 = 2;

/// Rounds a monetary amount to whole cents, with midpoints rounded away from
/// zero.
///
/// # Examples
///
/// ```
/// use cart_totals::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("1.005").unwrap()), Decimal::from_str("1.01").unwrap());
/// assert_eq!(round2(Decimal::from_str("1.994").unwrap()), Decimal::from_str("1.99").unwrap());
/// ```
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_up() {
        assert_eq!(round2(dec("0.125")), dec("0.13"));
        assert_eq!(round2(dec("2.675")), dec("2.68"));
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        assert_eq!(round2(dec("0.1249")), dec("0.12"));
    }

    #[test]
    fn test_already_rounded_is_unchanged() {
        assert_eq!(round2(dec("19.80")), dec("19.80"));
        assert_eq!(round2(dec("20")), dec("20"));
        assert_eq!(round2(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_rounding_is_idempotent() {
        let once = round2(dec("1.9990"));
        assert_eq!(round2(once), once);
    }
}
