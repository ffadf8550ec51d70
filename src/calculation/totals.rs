//! Cart totals aggregation.
//!
//! This module combines line items into [`CartTotals`]: the subtotal is
//! discounted, tax is charged on the discounted taxable portion, and the four
//! resulting figures are rounded to cents.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, CartItem, CartTotals};

use super::discount::apply_discount;
use super::rounding::round2;
use super::tax::calculate_tax;

/// The totals of a cart together with the audit steps that produced them.
#[derive(Debug, Clone)]
pub struct TotalsCalculation {
    /// The rounded cart totals.
    pub totals: CartTotals,
    /// One audit step per stage of the calculation, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the subtotal, discount, tax and total for a cart.
///
/// The discount percentage applies to the whole subtotal. Tax is charged on
/// the non-exempt items' subtotal after the same percentage discount. All four
/// figures are rounded to cents independently. An empty cart yields all-zero
/// totals without validating the discount or tax rate.
///
/// # Errors
///
/// Propagates [`InvalidArgument`](crate::error::InvalidArgument) from
/// [`apply_discount`] and [`calculate_tax`] unchanged. Returns
/// `AmountOutOfRange` when a line total, sum or the final total does not fit
/// in a `Decimal`.
///
/// # Examples
///
/// ```
/// use cart_totals::calculation::calculate_total;
/// use cart_totals::models::CartItem;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let items = vec![CartItem::new(Decimal::from(20), 1)];
/// let totals = calculate_total(&items, Decimal::from(10), Decimal::from(10)).unwrap();
///
/// assert_eq!(totals.subtotal, Decimal::from(20));
/// assert_eq!(totals.discount, Decimal::from(2));
/// assert_eq!(totals.tax, Decimal::from_str("1.80").unwrap());
/// assert_eq!(totals.total, Decimal::from_str("19.80").unwrap());
/// ```
pub fn calculate_total(
    items: &[CartItem],
    discount_percent: Decimal,
    tax_rate: Decimal,
) -> EngineResult<CartTotals> {
    calculate_total_with_audit(items, discount_percent, tax_rate, 1).map(|calc| calc.totals)
}

/// Sums `price * quantity` over `items` without overflowing.
fn sum_line_totals<'a, I>(items: I, operation: &str) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = &'a CartItem>,
{
    items.into_iter().try_fold(Decimal::ZERO, |acc, item| {
        acc.checked_add(item.line_total()?)
            .ok_or_else(|| EngineError::out_of_range(operation))
    })
}

/// Calculates cart totals and records an audit step for each stage.
///
/// Produces exactly the same totals as [`calculate_total`]. Steps are
/// numbered consecutively starting at `step_number`.
///
/// # Arguments
///
/// * `items` - The cart line items
/// * `discount_percent` - Percentage discount applied to the subtotal (0-100)
/// * `tax_rate` - Tax rate in percent applied to the discounted taxable portion
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_total_with_audit(
    items: &[CartItem],
    discount_percent: Decimal,
    tax_rate: Decimal,
    step_number: u32,
) -> EngineResult<TotalsCalculation> {
    if items.is_empty() {
        let audit_step = AuditStep {
            step_number,
            rule_id: "empty_cart".to_string(),
            rule_name: "Empty Cart".to_string(),
            input: serde_json::json!({ "item_count": 0 }),
            output: serde_json::json!({ "total": "0" }),
            reasoning: "Cart has no items - all totals are zero".to_string(),
        };

        return Ok(TotalsCalculation {
            totals: CartTotals::default(),
            audit_steps: vec![audit_step],
        });
    }

    let mut audit_steps = Vec::with_capacity(5);
    let mut step = step_number;

    let subtotal = sum_line_totals(items, "subtotal")?;
    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "subtotal".to_string(),
        rule_name: "Cart Subtotal".to_string(),
        input: serde_json::json!({ "item_count": items.len() }),
        output: serde_json::json!({ "subtotal": subtotal.normalize().to_string() }),
        reasoning: format!(
            "Sum of price x quantity over {} item(s) = ${}",
            items.len(),
            subtotal.normalize()
        ),
    });
    step += 1;

    let discounted_subtotal = apply_discount(subtotal, discount_percent)?;
    let discount = subtotal - discounted_subtotal;
    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "discount".to_string(),
        rule_name: "Subtotal Discount".to_string(),
        input: serde_json::json!({
            "subtotal": subtotal.normalize().to_string(),
            "discount_percent": discount_percent.normalize().to_string()
        }),
        output: serde_json::json!({
            "discounted_subtotal": discounted_subtotal.normalize().to_string(),
            "discount": discount.normalize().to_string()
        }),
        reasoning: format!(
            "${} less {}% = ${}",
            subtotal.normalize(),
            discount_percent.normalize(),
            discounted_subtotal.normalize()
        ),
    });
    step += 1;

    let (taxable, exempt): (Vec<&CartItem>, Vec<&CartItem>) =
        items.iter().partition(|item| !item.is_tax_exempt);
    let taxable_subtotal = sum_line_totals(taxable.iter().copied(), "taxable subtotal")?;
    // Discount is applied to the taxable slice at the cart-wide rate, not per item.
    let taxable_after_discount = apply_discount(taxable_subtotal, discount_percent)?;
    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "taxable_subtotal".to_string(),
        rule_name: "Taxable Subtotal".to_string(),
        input: serde_json::json!({
            "taxable_item_count": taxable.len(),
            "exempt_item_count": exempt.len(),
            "discount_percent": discount_percent.normalize().to_string()
        }),
        output: serde_json::json!({
            "taxable_subtotal": taxable_subtotal.normalize().to_string(),
            "taxable_after_discount": taxable_after_discount.normalize().to_string()
        }),
        reasoning: format!(
            "{} taxable item(s) total ${}, less {}% = ${} ({} exempt item(s) excluded)",
            taxable.len(),
            taxable_subtotal.normalize(),
            discount_percent.normalize(),
            taxable_after_discount.normalize(),
            exempt.len()
        ),
    });
    step += 1;

    let tax = calculate_tax(taxable_after_discount, tax_rate, false)?;
    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "tax".to_string(),
        rule_name: "Sales Tax".to_string(),
        input: serde_json::json!({
            "taxable_after_discount": taxable_after_discount.normalize().to_string(),
            "tax_rate": tax_rate.normalize().to_string()
        }),
        output: serde_json::json!({ "tax": tax.normalize().to_string() }),
        reasoning: format!(
            "${} x {}% = ${}",
            taxable_after_discount.normalize(),
            tax_rate.normalize(),
            tax.normalize()
        ),
    });
    step += 1;

    let total = discounted_subtotal
        .checked_add(tax)
        .ok_or_else(|| EngineError::out_of_range("total"))?;
    let totals = CartTotals {
        subtotal: round2(subtotal),
        discount: round2(discount),
        tax: round2(tax),
        total: round2(total),
    };
    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "total".to_string(),
        rule_name: "Cart Total".to_string(),
        input: serde_json::json!({
            "discounted_subtotal": discounted_subtotal.normalize().to_string(),
            "tax": tax.normalize().to_string()
        }),
        output: serde_json::json!({
            "subtotal": totals.subtotal.to_string(),
            "discount": totals.discount.to_string(),
            "tax": totals.tax.to_string(),
            "total": totals.total.to_string()
        }),
        reasoning: format!(
            "${} + ${} tax = ${}",
            discounted_subtotal.normalize(),
            tax.normalize(),
            totals.total
        ),
    });

    debug!(
        item_count = items.len(),
        subtotal = %totals.subtotal,
        discount = %totals.discount,
        tax = %totals.tax,
        total = %totals.total,
        "Calculated cart totals"
    );

    Ok(TotalsCalculation {
        totals,
        audit_steps,
    })
}
