//! Cart Totals Engine
//!
//! This crate computes shopping-cart monetary totals: percentage discounts,
//! tax on the taxable portion of a cart, and aggregation across line items.
//! The calculations are pure functions over [`rust_decimal::Decimal`]; an
//! optional HTTP API exposes them with configurable defaults.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
