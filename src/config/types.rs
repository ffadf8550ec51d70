//! Configuration types for cart pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the `pricing.yaml` configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::InvalidArgument;

/// Metadata about the store the configuration belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreMetadata {
    /// A short identifying code for the store (e.g., "demo-store").
    pub code: String,
    /// The human-readable name of the store.
    pub name: String,
}

/// Default pricing values used when a request does not supply its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PricingDefaults {
    /// Default discount percentage (0-100).
    #[serde(default)]
    pub discount_percent: Decimal,
    /// Default tax rate in percent.
    #[serde(default)]
    pub tax_rate: Decimal,
}

impl PricingDefaults {
    /// Checks the defaults against the same bounds the calculations enforce.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        if self.discount_percent < Decimal::ZERO {
            return Err(InvalidArgument::NegativeDiscount);
        }
        if self.discount_percent > Decimal::ONE_HUNDRED {
            return Err(InvalidArgument::DiscountTooLarge);
        }
        if self.tax_rate < Decimal::ZERO {
            return Err(InvalidArgument::NegativeTaxRate);
        }
        Ok(())
    }
}

/// The complete pricing configuration loaded from `pricing.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Store metadata.
    pub store: StoreMetadata,
    /// Default discount and tax values.
    #[serde(default)]
    pub defaults: PricingDefaults,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            store: StoreMetadata {
                code: "default".to_string(),
                name: "Default Store".to_string(),
            },
            defaults: PricingDefaults::default(),
        }
    }
}
