//! Payslip result models for the Payslip Calculation Engine.
//!
//! This module contains the [`PayslipResult`] type and its associated
//! structures that capture all outputs of a payslip calculation, including
//! the statutory deduction summaries, totals, display strings and audit
//! trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DiscountEntry, Employee, Employer};

/// The base and amount of a statutory deduction.
///
/// The payslip footer prints one of these for the housing-fund (FGTS)
/// contribution and one for the income tax (IRRF) withholding.
///
/// # Example
///
/// ```
/// use holerite_engine::models::DeductionSummary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let fgts = DeductionSummary {
///     base: Decimal::from_str("2500.00").unwrap(),
///     amount: Decimal::from_str("200.00").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSummary {
    /// The base the deduction was computed on.
    pub base: Decimal,
    /// The computed deduction amount.
    pub amount: Decimal,
}

/// Aggregated totals for a payslip.
///
/// The income tax amount is reported separately in the result; it is not
/// part of `total_deductions`, matching the payslip layout where the
/// withholding appears only in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipTotals {
    /// Total earnings (the base salary).
    pub total_earnings: Decimal,
    /// Total of the accumulated line discounts.
    pub total_deductions: Decimal,
    /// Net pay (earnings minus deductions).
    pub net_pay: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal provision or published table for this rule.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate entries that were skipped or excluded without
/// preventing the calculation, such as an unparseable discount line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Locale-formatted strings for the payslip renderer.
///
/// Every value is formatted with two decimals, `,` as the decimal separator
/// and `.` as the thousands separator, ready to be painted onto the payslip
/// template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipDisplay {
    /// The base salary.
    pub salary: String,
    /// The housing-fund contribution base.
    pub housing_fund_base: String,
    /// The housing-fund contribution amount.
    pub housing_fund_amount: String,
    /// The income tax base.
    pub income_tax_base: String,
    /// The income tax withholding amount.
    pub income_tax_amount: String,
    /// Total earnings.
    pub total_earnings: String,
    /// Total deductions.
    pub total_deductions: String,
    /// Net pay.
    pub net_pay: String,
}

/// The complete result of a payslip calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The reference month printed on the payslip (e.g., "MARÇO / 2025").
    pub reference: String,
    /// The employer identification block.
    pub employer: Employer,
    /// The employee identification block.
    pub employee: Employee,
    /// The payslip body lines, in insertion order.
    pub lines: Vec<DiscountEntry>,
    /// The housing-fund contribution summary.
    pub housing_fund: DeductionSummary,
    /// The social security contribution deducted inside the tax base.
    pub social_security_contribution: Decimal,
    /// The income tax withholding summary (base and amount clamped to zero).
    pub income_tax: DeductionSummary,
    /// Aggregated totals.
    pub totals: PayslipTotals,
    /// Locale-formatted strings for the renderer.
    pub display: PayslipDisplay,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
