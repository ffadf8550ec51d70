//! Configuration loading and management for the Cart Totals Engine.
//!
//! This module provides functionality to load pricing configuration from a
//! YAML file: store metadata plus the default discount and tax rate applied
//! when a request leaves them out.
//!
//! # Example
//!
//! ```no_run
//! use cart_totals::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/demo-store").unwrap();
//! println!("Loaded store: {}", config.store().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, PRICING_FILE};
pub use types::{PricingConfig, PricingDefaults, StoreMetadata};
