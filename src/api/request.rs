//! Request types for the Payslip Calculation Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint. Monetary fields arrive as the raw locale-formatted strings
//! the form widgets hold ("2.500,00"), exactly as the user typed them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::format_cnpj;
use crate::models::{Employee, Employer};

/// Request body for the `/calculate` endpoint.
///
/// Contains the payslip header data and the raw field values needed to
/// calculate the statutory deductions and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// The employer identification block.
    pub employer: EmployerRequest,
    /// The employee identification block.
    pub employee: EmployeeRequest,
    /// The reference date or free-text competence ("10/03/2025").
    #[serde(default)]
    pub reference: String,
    /// The base salary as a locale-formatted string.
    pub salary: String,
    /// Optional alimony deduction as a locale-formatted string.
    #[serde(default)]
    pub alimony: Option<String>,
    /// The payslip body lines, in display order.
    #[serde(default)]
    pub lines: Vec<LineRequest>,
}

/// Employer information in a payslip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerRequest {
    /// The employer's legal name.
    pub name: String,
    /// The employer's CNPJ, raw or partially typed.
    #[serde(default)]
    pub cnpj: String,
    /// The employer's address line.
    #[serde(default)]
    pub address: String,
}

/// Employee information in a payslip request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's full name.
    pub name: String,
    /// The employee's registration number.
    #[serde(default)]
    pub registration: String,
    /// The employee's position or role.
    #[serde(default)]
    pub position: String,
    /// The admission date, when known.
    #[serde(default)]
    pub admission_date: Option<NaiveDate>,
    /// Number of declared dependents.
    #[serde(default)]
    pub dependents: u32,
}

/// One body line in a payslip request.
///
/// The earning and discount columns are locale-formatted strings; an empty
/// string means the column is blank for this line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRequest {
    /// The event code for this line.
    #[serde(default)]
    pub code: String,
    /// Free-text description of the line.
    pub description: String,
    /// The earning column, as typed.
    #[serde(default)]
    pub earning: String,
    /// The discount column, as typed.
    #[serde(default)]
    pub discount: String,
}

impl From<EmployerRequest> for Employer {
    fn from(req: EmployerRequest) -> Self {
        Employer {
            name: req.name,
            cnpj: format_cnpj(&req.cnpj),
            address: req.address,
        }
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            name: req.name,
            registration: req.registration,
            position: req.position,
            admission_date: req.admission_date,
            dependents: req.dependents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_payslip_request() {
        let json = r#"{
            "employer": {
                "name": "Empresa Exemplo Ltda",
                "cnpj": "12345678000190",
                "address": "Rua Principal, 100"
            },
            "employee": {
                "name": "Maria da Silva",
                "registration": "0042",
                "position": "Analista",
                "dependents": 1
            },
            "reference": "10/03/2025",
            "salary": "2.500,00",
            "lines": [
                {
                    "code": "101",
                    "description": "Vale transporte",
                    "discount": "150,00"
                }
            ]
        }"#;

        let request: PayslipRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.salary, "2.500,00");
        assert_eq!(request.employee.dependents, 1);
        assert_eq!(request.lines.len(), 1);
        assert_eq!(request.lines[0].earning, "");
        assert!(request.alimony.is_none());
    }

    #[test]
    fn test_employer_conversion_masks_cnpj() {
        let req = EmployerRequest {
            name: "Empresa Exemplo Ltda".to_string(),
            cnpj: "12345678000190".to_string(),
            address: String::new(),
        };

        let employer: Employer = req.into();
        assert_eq!(employer.cnpj, "12.345.678/0001-90");
    }

    #[test]
    fn test_employee_conversion() {
        let req = EmployeeRequest {
            name: "Maria da Silva".to_string(),
            registration: "0042".to_string(),
            position: "Analista".to_string(),
            admission_date: NaiveDate::from_ymd_opt(2022, 3, 1),
            dependents: 2,
        };

        let employee: Employee = req.into();
        assert_eq!(employee.dependents, 2);
        assert_eq!(employee.admission_date, NaiveDate::from_ymd_opt(2022, 3, 1));
    }
}
