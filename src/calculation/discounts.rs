//! Discount line summation.
//!
//! The form layer hands over the raw discount column as typed: plain
//! comma-decimal numbers and the occasional percentage entry ("5%").
//! Percentage entries are resolved against the salary elsewhere in the
//! workflow; they are parsed here for validation but do not join the flat
//! total. Entries that fail to parse are skipped rather than failing the
//! whole payslip, so a half-typed line never blocks recalculation.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{AuditStep, AuditWarning};

/// The result of summing the discount column.
#[derive(Debug, Clone)]
pub struct DiscountSumResult {
    /// The sum of all successfully parsed plain entries.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// One warning per skipped or excluded entry.
    pub warnings: Vec<AuditWarning>,
}

/// Sums the plain entries of a discount column.
///
/// Plain entries have their `,` decimal separator normalized to `.` before
/// parsing; percentage entries and unparseable entries contribute nothing,
/// each leaving a warning in the result.
///
/// # Examples
///
/// ```
/// use holerite_engine::calculation::sum_discounts;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entries = ["100,00".to_string(), "5%".to_string(), "50,00".to_string()];
/// let result = sum_discounts(&entries, 1);
/// assert_eq!(result.total, Decimal::from_str("150.00").unwrap());
/// ```
pub fn sum_discounts(entries: &[String], step_number: u32) -> DiscountSumResult {
    let mut total = Decimal::ZERO;
    let mut warnings = Vec::new();
    let mut summed = 0usize;

    for entry in entries {
        if entry.contains('%') {
            let percentage = Decimal::from_str(entry.trim().trim_end_matches('%'))
                .map(|p| p / Decimal::ONE_HUNDRED);
            let message = match percentage {
                Ok(fraction) => format!(
                    "Percentage entry '{}' ({}) excluded from the flat total",
                    entry,
                    fraction.normalize()
                ),
                Err(_) => format!("Percentage entry '{}' could not be parsed", entry),
            };
            warnings.push(AuditWarning {
                code: "PERCENTAGE_EXCLUDED".to_string(),
                message,
                severity: "low".to_string(),
            });
            continue;
        }

        match Decimal::from_str(&entry.replace(',', ".")) {
            Ok(value) => {
                total += value;
                summed += 1;
            }
            Err(_) => {
                warnings.push(AuditWarning {
                    code: "DISCOUNT_SKIPPED".to_string(),
                    message: format!("Discount entry '{}' could not be parsed", entry),
                    severity: "low".to_string(),
                });
            }
        }
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "discount_sum".to_string(),
        rule_name: "Discount Column Summation".to_string(),
        legal_ref: "-".to_string(),
        input: serde_json::json!({
            "entries": entries,
        }),
        output: serde_json::json!({
            "total": total.normalize().to_string(),
            "summed_entries": summed,
            "skipped_entries": warnings.len()
        }),
        reasoning: format!(
            "Summed {} of {} entries into R$ {}",
            summed,
            entries.len(),
            total.normalize()
        ),
    };

    DiscountSumResult {
        total,
        audit_step,
        warnings,
    }
}
