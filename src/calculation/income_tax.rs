//! Progressive income tax (IRRF) withholding calculation.
//!
//! The tax base is the salary minus the tiered social security
//! contribution, the per-dependent deduction and any alimony. The bracket
//! lookup uses the unclamped base; only the returned base and amount are
//! clamped to zero. The clamping is deliberately asymmetric with the other
//! deductions: the housing-fund and social security values pass negative
//! inputs through, this function never reports a negative result.

use rust_decimal::Decimal;

use crate::config::TaxTables;
use crate::models::{AuditStep, DeductionSummary};

use super::social_security::calculate_social_security;

/// The result of an income tax withholding calculation.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// The tax base and withholding amount, both clamped to zero.
    pub summary: DeductionSummary,
    /// The social security contribution deducted while building the base.
    pub contribution: Decimal,
    /// The audit steps recording this calculation (contribution walk first,
    /// then the bracket lookup).
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the income tax withholding on a base salary.
///
/// This function has no error condition: the open top bracket guarantees
/// the lookup always resolves, and negative intermediate values are clamped
/// at the result boundary.
///
/// # Arguments
///
/// * `salary` - The base salary
/// * `dependents` - Number of declared dependents
/// * `alimony` - Court-ordered alimony deducted from the base
/// * `tables` - The statutory tables
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```no_run
/// use holerite_engine::calculation::calculate_income_tax;
/// use holerite_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/brasil-2025").unwrap();
/// let salary = Decimal::from_str("2500.00").unwrap();
/// let result = calculate_income_tax(salary, 0, Decimal::ZERO, loader.tables(), 1);
/// assert_eq!(result.summary.base, Decimal::from_str("2296.18").unwrap());
/// ```
pub fn calculate_income_tax(
    salary: Decimal,
    dependents: u32,
    alimony: Decimal,
    tables: &TaxTables,
    step_number: u32,
) -> IncomeTaxResult {
    let social_security = calculate_social_security(salary, tables, step_number);
    let contribution = social_security.contribution;

    let dependent_deduction = Decimal::from(dependents) * tables.allowances().per_dependent;
    let base = salary - contribution - dependent_deduction - alimony;

    // The lookup runs on the unclamped base; the open bracket matches
    // everything the bounded ones do not.
    let bracket = tables
        .withholding_brackets()
        .iter()
        .find(|b| b.ceiling.is_none_or(|ceiling| base <= ceiling));

    let (rate, deduction) = match bracket {
        Some(b) => (b.rate, b.deduction),
        None => (Decimal::ZERO, Decimal::ZERO),
    };
    let withholding = base * rate - deduction;

    let clamped_base = base.max(Decimal::ZERO);
    let clamped_amount = withholding.max(Decimal::ZERO);

    let audit_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax Withholding (IRRF)".to_string(),
        legal_ref: tables.withholding_legal_ref().to_string(),
        input: serde_json::json!({
            "salary": salary.to_string(),
            "contribution": contribution.normalize().to_string(),
            "dependents": dependents,
            "dependent_deduction": dependent_deduction.normalize().to_string(),
            "alimony": alimony.to_string()
        }),
        output: serde_json::json!({
            "unclamped_base": base.normalize().to_string(),
            "rate": rate.to_string(),
            "bracket_deduction": deduction.to_string(),
            "base": clamped_base.normalize().to_string(),
            "amount": clamped_amount.normalize().to_string()
        }),
        reasoning: format!(
            "Base R$ {} falls at rate {}; R$ {} x {} - R$ {} = R$ {}",
            base.normalize(),
            rate.normalize(),
            base.normalize(),
            rate.normalize(),
            deduction.normalize(),
            withholding.normalize()
        ),
    };

    IncomeTaxResult {
        summary: DeductionSummary {
            base: clamped_base,
            amount: clamped_amount,
        },
        contribution,
        audit_steps: vec![social_security.audit_step, audit_step],
    }
}
