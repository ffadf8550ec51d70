//! Error types for the Cart Totals Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing a cart.

use thiserror::Error;

/// The reason an argument to a calculation was rejected.
///
/// The display text of each variant is the message reported to callers.
///
/// # Example
///
/// ```
/// use cart_totals::error::InvalidArgument;
///
/// assert_eq!(
///     InvalidArgument::DiscountTooLarge.to_string(),
///     "Discount cannot exceed 100%"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// A price (or an aggregated subtotal) was below zero.
    #[error("Price cannot be negative")]
    NegativePrice,
    /// A discount percentage was below zero.
    #[error("Discount cannot be negative")]
    NegativeDiscount,
    /// A discount percentage was above 100.
    #[error("Discount cannot exceed 100%")]
    DiscountTooLarge,
    /// A tax rate was below zero.
    #[error("Tax rate cannot be negative")]
    NegativeTaxRate,
}

/// The main error type for the Cart Totals Engine.
///
/// # Example
///
/// ```
/// use cart_totals::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/pricing.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pricing.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A calculation received an argument outside its contract.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// An intermediate or final amount exceeded the representable range.
    #[error("Amount out of range while calculating {operation}")]
    AmountOutOfRange {
        /// The calculation stage that overflowed (e.g., "subtotal").
        operation: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or contained invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Creates an `AmountOutOfRange` error for the named calculation stage.
    pub fn out_of_range(operation: &str) -> Self {
        EngineError::AmountOutOfRange {
            operation: operation.to_string(),
        }
    }

    /// Returns the argument violation if this is an `InvalidArgument` error.
    pub fn invalid_argument(&self) -> Option<InvalidArgument> {
        match self {
            EngineError::InvalidArgument(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
