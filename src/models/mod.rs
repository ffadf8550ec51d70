//! Core data models for the Cart Totals Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod cart_item;
mod cart_totals;

pub use calculation_result::{AuditStep, AuditTrace, CalculationResult};
pub use cart_item::CartItem;
pub use cart_totals::CartTotals;
