//! Calculation logic for the Cart Totals Engine.
//!
//! This module contains the pure pricing functions: cent rounding, percentage
//! discounts, tax, and the totals aggregation that combines them.

mod discount;
mod rounding;
mod tax;
mod totals;

pub use discount::apply_discount;
pub use rounding::{CENT_PLACES, round2};
pub use tax::calculate_tax;
pub use totals::{TotalsCalculation, calculate_total, calculate_total_with_audit};
