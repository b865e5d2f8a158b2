//! Data models for the Payslip Calculation Engine.
//!
//! This module contains the transient value types used by the engine:
//! employer/employee identification, discount line entries and the
//! payslip result with its audit trace.

mod discount;
mod employee;
mod payslip_result;

pub use discount::DiscountEntry;
pub use employee::{Employee, Employer};
pub use payslip_result::{
    AuditStep, AuditTrace, AuditWarning, DeductionSummary, PayslipDisplay, PayslipResult,
    PayslipTotals,
};
