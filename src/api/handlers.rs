//! HTTP request handlers for the Payslip Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_housing_fund, calculate_income_tax, calculate_totals, sum_discounts,
};
use crate::config::TaxTables;
use crate::error::EngineResult;
use crate::format::{format_amount, parse_amount, parse_line_item, reference_month};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DiscountEntry, Employee, Employer, PayslipDisplay,
    PayslipResult,
};

use super::request::{LineRequest, PayslipRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a payslip request and returns the calculated result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match perform_calculation(request, state.config().tables()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee = %result.employee.name,
                net_pay = %result.totals.net_pay,
                duration_us = duration.as_micros(),
                "Payslip calculated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Performs the payslip calculation from the raw form values.
fn perform_calculation(request: PayslipRequest, tables: &TaxTables) -> EngineResult<PayslipResult> {
    let start_time = Instant::now();

    let salary = parse_amount(&request.salary)?;
    let alimony = match &request.alimony {
        Some(text) if !text.trim().is_empty() => parse_amount(text)?,
        _ => Decimal::ZERO,
    };

    let employer: Employer = request.employer.into();
    let employee: Employee = request.employee.into();

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let housing_fund = calculate_housing_fund(salary, tables, step_number);
    steps.push(housing_fund.audit_step);
    step_number += 1;

    let income_tax = calculate_income_tax(salary, employee.dependents, alimony, tables, step_number);
    let steps_count = income_tax.audit_steps.len();
    steps.extend(income_tax.audit_steps);
    step_number += steps_count as u32;

    // The discount column is summed from the raw strings, preserving the
    // lenient skip-on-parse-failure policy of the form workflow.
    let discount_strings: Vec<String> = request
        .lines
        .iter()
        .filter(|line| !line.discount.trim().is_empty())
        .map(|line| line.discount.clone())
        .collect();
    let discount_sum = sum_discounts(&discount_strings, step_number);
    steps.push(discount_sum.audit_step);
    warnings.extend(discount_sum.warnings);
    step_number += 1;

    let totals = calculate_totals(
        salary,
        discount_sum.total,
        income_tax.summary.amount,
        step_number,
    );
    steps.push(totals.audit_step);

    let lines: Vec<DiscountEntry> = request.lines.iter().map(line_entry).collect();

    let display = PayslipDisplay {
        salary: format_amount(salary),
        housing_fund_base: format_amount(housing_fund.summary.base),
        housing_fund_amount: format_amount(housing_fund.summary.amount),
        income_tax_base: format_amount(income_tax.summary.base),
        income_tax_amount: format_amount(income_tax.summary.amount),
        total_earnings: format_amount(totals.totals.total_earnings),
        total_deductions: format_amount(totals.totals.total_deductions),
        net_pay: format_amount(totals.totals.net_pay),
    };

    Ok(PayslipResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        reference: reference_month(&request.reference),
        employer,
        employee,
        lines,
        housing_fund: housing_fund.summary,
        social_security_contribution: income_tax.contribution,
        income_tax: income_tax.summary,
        totals: totals.totals,
        display,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

/// Converts one request line to its domain entry.
fn line_entry(line: &LineRequest) -> DiscountEntry {
    DiscountEntry {
        code: line.code.clone(),
        description: line.description.clone(),
        earning: optional_line_amount(&line.earning),
        discount: optional_line_amount(&line.discount),
    }
}

/// Parses a line column leniently: blank, zero and unparseable text all
/// render as an absent amount, matching the blank-cell payslip layout.
fn optional_line_amount(raw: &str) -> Option<Decimal> {
    if raw.trim().is_empty() {
        return None;
    }
    match parse_line_item(raw) {
        Ok(value) if !value.is_zero() => Some(value),
        _ => None,
    }
}
