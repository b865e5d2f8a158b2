//! Tiered social security (INSS) contribution calculation.
//!
//! The contribution walks the ascending bracket table keeping a
//! remaining-salary accumulator. Each bracket taxes
//! `min(remaining, ceiling)` at its rate; whatever is left past the last
//! bracket is not taxed, mirroring the contribution ceiling. The bracket
//! ceiling doubles as the per-step cap, so the table encodes the walk
//! exactly as published for payroll use.

use rust_decimal::Decimal;

use crate::config::TaxTables;
use crate::models::AuditStep;

/// The result of a social security contribution calculation.
#[derive(Debug, Clone)]
pub struct SocialSecurityResult {
    /// The total contribution across all brackets. Not clamped.
    pub contribution: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the tiered social security contribution on a base salary.
///
/// # Arguments
///
/// * `salary` - The base salary
/// * `tables` - The statutory tables carrying the contribution brackets
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```no_run
/// use holerite_engine::calculation::calculate_social_security;
/// use holerite_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/brasil-2025").unwrap();
/// let salary = Decimal::from_str("2500.00").unwrap();
/// let result = calculate_social_security(salary, loader.tables(), 1);
/// // 1412.00 x 7.5% + 1088.00 x 9% = 105.90 + 97.92
/// assert_eq!(result.contribution, Decimal::from_str("203.82").unwrap());
/// ```
pub fn calculate_social_security(
    salary: Decimal,
    tables: &TaxTables,
    step_number: u32,
) -> SocialSecurityResult {
    let mut contribution = Decimal::ZERO;
    let mut remaining = salary;
    let mut slices = Vec::new();

    for bracket in tables.contribution_brackets() {
        if remaining <= Decimal::ZERO {
            break;
        }
        let slice = remaining.min(bracket.ceiling);
        contribution += slice * bracket.rate;
        remaining -= slice;
        slices.push(serde_json::json!({
            "ceiling": bracket.ceiling.to_string(),
            "rate": bracket.rate.to_string(),
            "taxed": slice.normalize().to_string()
        }));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_security".to_string(),
        rule_name: "Social Security Contribution (INSS)".to_string(),
        legal_ref: tables.contribution_legal_ref().to_string(),
        input: serde_json::json!({
            "salary": salary.to_string()
        }),
        output: serde_json::json!({
            "contribution": contribution.normalize().to_string(),
            "untaxed_remainder": remaining.max(Decimal::ZERO).normalize().to_string(),
            "slices": slices
        }),
        reasoning: format!(
            "Progressive walk over {} brackets on R$ {} = R$ {}",
            tables.contribution_brackets().len(),
            salary.normalize(),
            contribution.normalize()
        ),
    };

    SocialSecurityResult {
        contribution,
        audit_step,
    }
}
