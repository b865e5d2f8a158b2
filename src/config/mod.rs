//! Configuration module for the Payslip Calculation Engine.
//!
//! Provides loading and access to the statutory deduction tables: the
//! tiered social security contribution brackets, the progressive income
//! tax withholding brackets and the fixed deduction allowances.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ContributionBracket, ContributionTable, DeductionAllowances, TableMetadata, TaxTables,
    WithholdingBracket, WithholdingTable,
};

#[cfg(test)]
pub(crate) use test_support::test_tables;
