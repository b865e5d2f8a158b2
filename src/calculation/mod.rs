//! Calculation logic for the Payslip Calculation Engine.
//!
//! This module contains the pure calculation functions: the flat
//! housing-fund (FGTS) contribution, the tiered social security (INSS)
//! contribution, the progressive income tax (IRRF) withholding, the
//! discount line summation and the payslip totals. Every function is
//! deterministic and side-effect free, so the form layer can re-invoke
//! them on every field edit.

mod discounts;
mod housing_fund;
mod income_tax;
mod social_security;
mod totals;

pub use discounts::{DiscountSumResult, sum_discounts};
pub use housing_fund::{HousingFundResult, calculate_housing_fund};
pub use income_tax::{IncomeTaxResult, calculate_income_tax};
pub use social_security::{SocialSecurityResult, calculate_social_security};
pub use totals::{TotalsResult, calculate_totals};
