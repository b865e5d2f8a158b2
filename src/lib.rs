//! Payslip Calculation Engine for Brazilian Payroll
//!
//! This crate computes the statutory deductions that appear on a Brazilian
//! payslip (holerite) - the FGTS housing-fund contribution, the tiered
//! INSS-style social security contribution and the progressive IRRF income
//! tax withholding - and provides the Brazilian-locale monetary string
//! parsing and formatting that the form layer relies on.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
