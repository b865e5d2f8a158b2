//! Housing-fund (FGTS) contribution calculation.
//!
//! The FGTS contribution is a flat levy on the base salary, independent of
//! the tiered social security contribution. Neither base nor amount is
//! clamped: a negative salary produces a negative contribution, which the
//! caller is responsible for rejecting upstream.

use rust_decimal::Decimal;

use crate::config::TaxTables;
use crate::models::{AuditStep, DeductionSummary};

/// The result of a housing-fund calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct HousingFundResult {
    /// The contribution base and amount.
    pub summary: DeductionSummary,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the housing-fund contribution on a base salary.
///
/// The base is the salary itself; the amount is the salary multiplied by
/// the configured flat rate. This function has no error condition.
///
/// # Arguments
///
/// * `salary` - The base salary
/// * `tables` - The statutory tables carrying the flat rate
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```no_run
/// use holerite_engine::calculation::calculate_housing_fund;
/// use holerite_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/brasil-2025").unwrap();
/// let salary = Decimal::from_str("2500.00").unwrap();
/// let result = calculate_housing_fund(salary, loader.tables(), 1);
/// assert_eq!(result.summary.amount, Decimal::from_str("200.00").unwrap());
/// ```
pub fn calculate_housing_fund(
    salary: Decimal,
    tables: &TaxTables,
    step_number: u32,
) -> HousingFundResult {
    let rate = tables.allowances().housing_fund_rate;
    let amount = salary * rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "housing_fund".to_string(),
        rule_name: "Housing Fund Contribution (FGTS)".to_string(),
        legal_ref: tables.allowances().housing_fund_legal_ref.clone(),
        input: serde_json::json!({
            "salary": salary.to_string(),
            "rate": rate.to_string()
        }),
        output: serde_json::json!({
            "base": salary.to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "R$ {} x {} = R$ {}",
            salary.normalize(),
            rate.normalize(),
            amount.normalize()
        ),
    };

    HousingFundResult {
        summary: DeductionSummary {
            base: salary,
            amount,
        },
        audit_step,
    }
}
