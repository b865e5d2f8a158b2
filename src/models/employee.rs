//! Employer and employee identification models.
//!
//! These types carry the header data printed on the payslip. They take no
//! part in the calculations beyond the employee's dependent count.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The employer identification block of a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employer {
    /// The employer's legal name.
    pub name: String,
    /// The employer's CNPJ, carrying the progressive display mask.
    pub cnpj: String,
    /// The employer's address line.
    pub address: String,
}

/// The employee identification block of a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's full name.
    pub name: String,
    /// The employee's registration number with the employer.
    pub registration: String,
    /// The employee's position or role.
    pub position: String,
    /// The date the employee was admitted, when known.
    pub admission_date: Option<NaiveDate>,
    /// Number of declared dependents, used for the income tax deduction.
    pub dependents: u32,
}
