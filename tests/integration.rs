//! Comprehensive integration tests for the Payslip Calculation Engine.
//!
//! This test suite covers the full calculation flow through the HTTP API:
//! - Statutory deductions (FGTS, INSS, IRRF) on a typical salary
//! - Dependent and alimony deductions
//! - Discount column summation, including percentage exclusion
//! - Brazilian-locale monetary parsing, including invalid input
//! - Header formatting (reference month, CNPJ mask)
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use holerite_engine::api::{AppState, create_router};
use holerite_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/brasil-2025").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    let d = Decimal::from_str(s).unwrap();
    d.normalize().to_string()
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(salary: &str, dependents: u32, lines: Vec<Value>) -> Value {
    json!({
        "employer": {
            "name": "Empresa Exemplo Ltda",
            "cnpj": "12345678000190",
            "address": "Rua Principal, 100"
        },
        "employee": {
            "name": "Maria da Silva",
            "registration": "0042",
            "position": "Analista",
            "dependents": dependents
        },
        "reference": "10/03/2025",
        "salary": salary,
        "lines": lines
    })
}

fn discount_line(code: &str, description: &str, discount: &str) -> Value {
    json!({
        "code": code,
        "description": description,
        "discount": discount
    })
}

fn assert_decimal_field(value: &Value, expected: &str) {
    let actual = value.as_str().unwrap();
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Statutory deductions
// =============================================================================

#[tokio::test]
async fn test_worked_scenario_2500() {
    let router = create_router_for_test();
    let request = create_request("2.500,00", 0, vec![]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result["housing_fund"]["base"], "2500.00");
    assert_decimal_field(&result["housing_fund"]["amount"], "200.00");
    assert_decimal_field(&result["social_security_contribution"], "203.82");
    assert_decimal_field(&result["income_tax"]["base"], "2296.18");
    assert_decimal_field(&result["income_tax"]["amount"], "2.7735");
    assert_eq!(result["display"]["income_tax_amount"], "2,77");
    assert_eq!(result["display"]["salary"], "2.500,00");
}

#[tokio::test]
async fn test_salary_below_exemption_has_no_withholding() {
    let router = create_router_for_test();
    let request = create_request("2.000,00", 0, vec![]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result["income_tax"]["amount"], "0");
    assert_eq!(result["display"]["income_tax_amount"], "0,00");
}

#[tokio::test]
async fn test_dependents_reduce_the_tax_base() {
    let router = create_router_for_test();

    let (_, none) = post_calculate(
        create_router_for_test(),
        create_request("3.000,00", 0, vec![]),
    )
    .await;
    let (_, two) = post_calculate(router, create_request("3.000,00", 2, vec![])).await;

    let base_none = Decimal::from_str(none["income_tax"]["base"].as_str().unwrap()).unwrap();
    let base_two = Decimal::from_str(two["income_tax"]["base"].as_str().unwrap()).unwrap();
    assert_eq!(base_none - base_two, Decimal::from_str("379.18").unwrap());
}

#[tokio::test]
async fn test_alimony_reduces_the_tax_base() {
    let router = create_router_for_test();
    let mut request = create_request("3.000,00", 0, vec![]);
    request["alimony"] = json!("500,00");

    let (_, with_alimony) = post_calculate(router, request).await;
    let (_, without) = post_calculate(
        create_router_for_test(),
        create_request("3.000,00", 0, vec![]),
    )
    .await;

    let base_with =
        Decimal::from_str(with_alimony["income_tax"]["base"].as_str().unwrap()).unwrap();
    let base_without = Decimal::from_str(without["income_tax"]["base"].as_str().unwrap()).unwrap();
    assert_eq!(base_without - base_with, Decimal::from_str("500.00").unwrap());
}

#[tokio::test]
async fn test_contribution_caps_at_last_bracket() {
    let router = create_router_for_test();
    let request = create_request("30.000,00", 0, vec![]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    // 1412 x 7.5% + 2666.68 x 9% + 4000.03 x 12% + 7786.02 x 14%
    assert_decimal_field(&result["social_security_contribution"], "1915.9476");
}

#[tokio::test]
async fn test_zero_salary_is_all_zeros() {
    let router = create_router_for_test();
    let request = create_request("0", 0, vec![]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result["housing_fund"]["amount"], "0");
    assert_decimal_field(&result["income_tax"]["amount"], "0");
    assert_decimal_field(&result["totals"]["net_pay"], "0");
    assert_eq!(result["display"]["net_pay"], "0,00");
}

// =============================================================================
// Discounts and totals
// =============================================================================

#[tokio::test]
async fn test_discounts_are_summed_and_percentages_excluded() {
    let router = create_router_for_test();
    let request = create_request(
        "2.500,00",
        0,
        vec![
            discount_line("101", "Vale transporte", "100,00"),
            discount_line("102", "Convênio", "5%"),
            discount_line("103", "Farmácia", "50,00"),
        ],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result["totals"]["total_deductions"], "150.00");
    assert_decimal_field(&result["totals"]["net_pay"], "2350.00");
    assert_eq!(result["display"]["net_pay"], "2.350,00");

    let warnings = result["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "PERCENTAGE_EXCLUDED");
}

#[tokio::test]
async fn test_income_tax_is_not_part_of_total_deductions() {
    let router = create_router_for_test();
    let request = create_request(
        "5.000,00",
        0,
        vec![discount_line("101", "Vale transporte", "100,00")],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    // The withholding is visibly non-zero yet the deductions only carry
    // the line discounts.
    let tax = Decimal::from_str(result["income_tax"]["amount"].as_str().unwrap()).unwrap();
    assert!(tax > Decimal::ZERO);
    assert_decimal_field(&result["totals"]["total_deductions"], "100.00");
    assert_decimal_field(&result["totals"]["net_pay"], "4900.00");
}

#[tokio::test]
async fn test_thousands_formatted_discount_is_skipped_from_sum() {
    let router = create_router_for_test();
    let request = create_request(
        "2.500,00",
        0,
        vec![
            discount_line("101", "Empréstimo", "1.000,00"),
            discount_line("102", "Farmácia", "50,00"),
        ],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    // The summation is string-based and lenient: the thousands-grouped
    // entry does not survive the comma swap and is skipped with a warning,
    // while the line itself still displays its parsed amount.
    assert_decimal_field(&result["totals"]["total_deductions"], "50.00");
    assert_decimal_field(&result["lines"][0]["discount"], "1000.00");

    let warnings = result["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "DISCOUNT_SKIPPED");
}

#[tokio::test]
async fn test_blank_line_columns_are_absent() {
    let router = create_router_for_test();
    let request = create_request(
        "2.500,00",
        0,
        vec![json!({
            "code": "201",
            "description": "Hora extra",
            "earning": "300,00"
        })],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&result["lines"][0]["earning"], "300.00");
    assert!(result["lines"][0]["discount"].is_null());
    // Earnings lines do not change the totals: earnings are the salary.
    assert_decimal_field(&result["totals"]["total_earnings"], "2500.00");
}

// =============================================================================
// Header formatting
// =============================================================================

#[tokio::test]
async fn test_reference_month_and_cnpj_are_formatted() {
    let router = create_router_for_test();
    let request = create_request("2.500,00", 0, vec![]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["reference"], "MARÇO / 2025");
    assert_eq!(result["employer"]["cnpj"], "12.345.678/0001-90");
}

#[tokio::test]
async fn test_free_text_reference_passes_through() {
    let router = create_router_for_test();
    let mut request = create_request("2.500,00", 0, vec![]);
    request["reference"] = json!("13º SALÁRIO");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["reference"], "13º SALÁRIO");
}

// =============================================================================
// Audit trace
// =============================================================================

#[tokio::test]
async fn test_audit_trace_has_sequential_steps() {
    let router = create_router_for_test();
    let request = create_request(
        "2.500,00",
        1,
        vec![discount_line("101", "Vale transporte", "100,00")],
    );

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let steps = result["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 5);
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step["step_number"], (i + 1) as u64);
    }
    assert_eq!(steps[0]["rule_id"], "housing_fund");
    assert_eq!(steps[1]["rule_id"], "social_security");
    assert_eq!(steps[2]["rule_id"], "income_tax");
    assert_eq!(steps[3]["rule_id"], "discount_sum");
    assert_eq!(steps[4]["rule_id"], "totals");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_inconsistent_separators_are_rejected() {
    let router = create_router_for_test();
    let request = create_request("1,234.56", 0, vec![]);

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_MONETARY_VALUE");
    assert!(result["message"].as_str().unwrap().contains("1,234.56"));
}

#[tokio::test]
async fn test_invalid_alimony_is_rejected() {
    let router = create_router_for_test();
    let mut request = create_request("2.500,00", 0, vec![]);
    request["alimony"] = json!("1,2,3");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_MONETARY_VALUE");
}

#[tokio::test]
async fn test_missing_salary_is_a_validation_error() {
    let router = create_router_for_test();
    let mut request = create_request("2.500,00", 0, vec![]);
    request.as_object_mut().unwrap().remove("salary");

    let (status, result) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}
