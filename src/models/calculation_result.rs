//! Calculation result models for the Cart Totals Engine.
//!
//! This module contains the [`CalculationResult`] type and its audit
//! structures, which capture the totals of a cart calculation together with
//! a step-by-step explanation of how they were reached.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CartTotals;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one stage of the
/// totals algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use cart_totals::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a cart totals calculation.
///
/// # Example
///
/// ```
/// use cart_totals::models::{AuditTrace, CalculationResult, CartTotals};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = CalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     item_count: 0,
///     discount_percent: Decimal::ZERO,
///     tax_rate: Decimal::ZERO,
///     totals: CartTotals::default(),
///     audit_trace: AuditTrace {
///         steps: vec![],
///         duration_us: 0,
///     },
/// };
/// assert_eq!(result.totals.total, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Number of line items in the cart.
    pub item_count: usize,
    /// The discount percentage that was applied.
    pub discount_percent: Decimal,
    /// The tax rate (percent) that was applied.
    pub tax_rate: Decimal,
    /// The rounded cart totals.
    pub totals: CartTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_step() -> AuditStep {
        AuditStep {
            step_number: 1,
            rule_id: "subtotal".to_string(),
            rule_name: "Cart Subtotal".to_string(),
            input: serde_json::json!({ "item_count": 1 }),
            output: serde_json::json!({ "subtotal": "20" }),
            reasoning: "20 x 1 = 20".to_string(),
        }
    }

    fn create_sample_result() -> CalculationResult {
        CalculationResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            item_count: 1,
            discount_percent: dec("10"),
            tax_rate: dec("10"),
            totals: CartTotals {
                subtotal: dec("20.00"),
                discount: dec("2.00"),
                tax: dec("1.80"),
                total: dec("19.80"),
            },
            audit_trace: AuditTrace {
                steps: vec![create_sample_step()],
                duration_us: 5,
            },
        }
    }

    #[test]
    fn test_total_equals_subtotal_minus_discount_plus_tax() {
        let result = create_sample_result();
        let totals = result.totals;
        assert_eq!(totals.subtotal - totals.discount + totals.tax, totals.total);
    }

    #[test]
    fn test_calculation_result_serialization() {
        let result = create_sample_result();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["item_count"], 1);
        assert_eq!(json["discount_percent"], "10");
        assert_eq!(json["totals"]["total"], "19.80");
        assert_eq!(json["audit_trace"]["steps"][0]["rule_id"], "subtotal");
        assert_eq!(json["audit_trace"]["duration_us"], 5);
        assert!(json["calculation_id"].is_string());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_calculation_result_deserialization() {
        let result = create_sample_result();
        let json = serde_json::to_string(&result).unwrap();

        let deserialized: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.calculation_id, result.calculation_id);
        assert_eq!(deserialized.totals, result.totals);
        assert_eq!(deserialized.audit_trace, result.audit_trace);
    }

    #[test]
    fn test_audit_step_serialization() {
        let json = serde_json::to_string(&create_sample_step()).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_name\":\"Cart Subtotal\""));
        assert!(json.contains("\"reasoning\":\"20 x 1 = 20\""));
    }
}
