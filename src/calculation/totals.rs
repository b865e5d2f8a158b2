//! Payslip totals aggregation.
//!
//! Earnings are the base salary; deductions are the accumulated line
//! discounts. The income tax amount is accepted and recorded in the audit
//! trail but is not added to the deductions: the payslip prints it in the
//! statutory footer only. Net pay is earnings minus deductions.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PayslipTotals};

/// The result of a totals aggregation, including the audit step.
#[derive(Debug, Clone)]
pub struct TotalsResult {
    /// The aggregated totals.
    pub totals: PayslipTotals,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Aggregates the payslip totals.
///
/// # Arguments
///
/// * `salary` - The base salary (the only earning)
/// * `total_discounts` - The accumulated line discounts
/// * `income_tax` - The withholding amount, recorded but not deducted
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_totals(
    salary: Decimal,
    total_discounts: Decimal,
    income_tax: Decimal,
    step_number: u32,
) -> TotalsResult {
    let total_earnings = salary;
    let total_deductions = total_discounts;
    let net_pay = total_earnings - total_deductions;

    let audit_step = AuditStep {
        step_number,
        rule_id: "totals".to_string(),
        rule_name: "Payslip Totals".to_string(),
        legal_ref: "-".to_string(),
        input: serde_json::json!({
            "salary": salary.to_string(),
            "total_discounts": total_discounts.normalize().to_string(),
            "income_tax": income_tax.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_earnings": total_earnings.normalize().to_string(),
            "total_deductions": total_deductions.normalize().to_string(),
            "net_pay": net_pay.normalize().to_string(),
            "income_tax_deducted": false
        }),
        reasoning: format!(
            "R$ {} - R$ {} = R$ {} (withholding of R$ {} shown in the footer only)",
            total_earnings.normalize(),
            total_deductions.normalize(),
            net_pay.normalize(),
            income_tax.normalize()
        ),
    };

    TotalsResult {
        totals: PayslipTotals {
            total_earnings,
            total_deductions,
            net_pay,
        },
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_net_is_earnings_minus_deductions() {
        let result = calculate_totals(dec("2500.00"), dec("150.00"), dec("2.77"), 1);
        assert_eq!(result.totals.total_earnings, dec("2500.00"));
        assert_eq!(result.totals.total_deductions, dec("150.00"));
        assert_eq!(result.totals.net_pay, dec("2350.00"));
    }

    #[test]
    fn test_income_tax_is_not_deducted() {
        let with_tax = calculate_totals(dec("2500.00"), dec("150.00"), dec("500.00"), 1);
        let without_tax = calculate_totals(dec("2500.00"), dec("150.00"), Decimal::ZERO, 1);
        assert_eq!(with_tax.totals.net_pay, without_tax.totals.net_pay);
    }

    #[test]
    fn test_zero_inputs_are_zero() {
        let result = calculate_totals(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO, 1);
        assert!(result.totals.net_pay.is_zero());
    }

    #[test]
    fn test_deductions_above_salary_go_negative() {
        // The totals are not clamped; the renderer shows a negative net.
        let result = calculate_totals(dec("1000.00"), dec("1200.00"), Decimal::ZERO, 1);
        assert_eq!(result.totals.net_pay, dec("-200.00"));
    }
}
