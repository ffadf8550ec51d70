//! Request types for the Cart Totals Engine API.
//!
//! This module defines the JSON request structures for the `/discount`,
//! `/tax` and `/totals` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CartItem;

/// Request body for the `/discount` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountRequest {
    /// The price to discount.
    pub price: Decimal,
    /// The discount percentage (0-100).
    pub discount_percent: Decimal,
}

/// Request body for the `/tax` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRequest {
    /// The price to tax.
    pub price: Decimal,
    /// The tax rate in percent. Falls back to the configured default.
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
    /// Whether the price is exempt from tax.
    #[serde(default)]
    pub is_tax_exempt: bool,
}

/// Request body for the `/totals` endpoint.
///
/// Contains the cart line items and optional overrides for the configured
/// discount and tax defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalsRequest {
    /// The cart line items.
    pub items: Vec<CartItem>,
    /// The discount percentage. Falls back to the configured default.
    #[serde(default)]
    pub discount_percent: Option<Decimal>,
    /// The tax rate in percent. Falls back to the configured default.
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
}
