//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pricing
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PricingConfig, PricingDefaults, StoreMetadata};

/// Name of the configuration file inside a configuration directory.
pub const PRICING_FILE: &str = "pricing.yaml";

/// Loads and provides access to pricing configuration.
///
/// # Directory Structure
///
/// ```text
/// config/demo-store/
/// └── pricing.yaml   # Store metadata and default discount / tax
/// ```
///
/// # Example
///
/// ```no_run
/// use cart_totals::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/demo-store").unwrap();
/// println!("Default tax rate: {}%", loader.default_tax_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PricingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `pricing.yaml` is missing (`ConfigNotFound`)
    /// - the file contains invalid YAML or is missing required fields
    ///   (`ConfigParseError`)
    /// - the default discount or tax rate is out of range (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let pricing_path = path.as_ref().join(PRICING_FILE);
        let path_str = pricing_path.display().to_string();

        let content = fs::read_to_string(&pricing_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: PricingConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        config
            .defaults
            .validate()
            .map_err(|reason| EngineError::ConfigParseError {
                path: path_str,
                message: format!("invalid defaults: {}", reason),
            })?;

        Ok(Self { config })
    }

    /// Creates a loader around an in-memory configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use cart_totals::config::{ConfigLoader, PricingConfig};
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::from_config(PricingConfig::default()).unwrap();
    /// assert_eq!(loader.default_tax_rate(), Decimal::ZERO);
    /// ```
    pub fn from_config(config: PricingConfig) -> EngineResult<Self> {
        config.defaults.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Returns the store metadata.
    pub fn store(&self) -> &StoreMetadata {
        &self.config.store
    }

    /// Returns the configured defaults.
    pub fn defaults(&self) -> PricingDefaults {
        self.config.defaults
    }

    /// Returns the default discount percentage.
    pub fn default_discount_percent(&self) -> Decimal {
        self.config.defaults.discount_percent
    }

    /// Returns the default tax rate.
    pub fn default_tax_rate(&self) -> Decimal {
        self.config.defaults.tax_rate
    }
}
