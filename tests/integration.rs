//! End-to-end tests for the finiquito engine HTTP API.
//!
//! This test suite covers:
//! - Resignation (finiquito only, with and without seniority premium)
//! - Justified dismissal
//! - Unjustified dismissal (conciliation and litigation scenarios)
//! - Pending days and overtime
//! - Seniority premium salary cap
//! - Advisory warnings
//! - CSV export and health check
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

use finiquito_engine::api::{AppState, create_router};
use finiquito_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/lft2015").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
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

    (status, body_bytes.to_vec())
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let (status, bytes) = post(router, "/calculate", body).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn create_request(
    start_date: &str,
    end_date: &str,
    daily_salary: &str,
    integrated_daily_salary: &str,
    cause: &str,
) -> Value {
    json!({
        "company_name": "Comercializadora del Norte",
        "worker_name": "Juan Pérez",
        "start_date": start_date,
        "end_date": end_date,
        "daily_salary": daily_salary,
        "integrated_daily_salary": integrated_daily_salary,
        "cause": cause
    })
}

fn assert_amount(actual: &Value, expected: &str) {
    let actual = actual
        .as_str()
        .unwrap_or_else(|| panic!("Expected a decimal string, got {}", actual));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected amount {}, got {}",
        expected,
        actual
    );
}

/// Returns (concept, amount) pairs of a breakdown sequence.
fn concepts(items: &Value) -> Vec<(String, String)> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| {
            (
                item["concept"].as_str().unwrap().to_string(),
                normalize_decimal(item["amount"].as_str().unwrap()),
            )
        })
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(concept, amount)| (concept.to_string(), normalize_decimal(amount)))
        .collect()
}

fn warning_codes(result: &Value) -> Vec<String> {
    result["audit_trace"]["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["code"].as_str().unwrap().to_string())
        .collect()
}

fn assert_has_audit_step_with_clause(result: &Value, clause_contains: &str) {
    let steps = result["audit_trace"]["steps"].as_array().unwrap();
    let found = steps.iter().any(|step| {
        step["clause_ref"]
            .as_str()
            .map(|c| c.contains(clause_contains))
            .unwrap_or(false)
    });
    assert!(
        found,
        "Expected audit step with clause containing '{}' not found",
        clause_contains
    );
}

// =============================================================================
// SECTION 1: Resignation
// =============================================================================

#[tokio::test]
async fn test_resignation_four_years() {
    let router = create_router_for_test();
    let request = create_request("2020-01-01", "2024-01-01", "300", "350", "RENUNCIA");

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["law_code"], "LFT2015");
    let result = &body["result"];

    assert_eq!(result["antiquity"]["years"], 4);
    assert_eq!(result["antiquity"]["days_partial"], 1);
    assert_eq!(result["antiquity"]["total_days"], 1461);

    let a = &result["scenario_a"];
    assert_eq!(a["name"], "Liquidación / Finiquito");
    assert_eq!(
        concepts(&a["breakdown"]["finiquito"]),
        pairs(&[
            ("Aguinaldo Proporcional", "12.33"),
            ("Vacaciones Proporcionales", "9.86"),
            ("Prima Vacacional", "2.47"),
        ])
    );
    assert!(a["breakdown"]["liquidacion"].as_array().unwrap().is_empty());
    assert_amount(&a["subtotal_liquidacion"], "0");
    assert_amount(&a["total"], "24.66");
    assert!(result.get("scenario_b").is_none());
    assert!(warning_codes(result).is_empty());
}

#[tokio::test]
async fn test_resignation_descriptions() {
    let router = create_router_for_test();
    let request = create_request("2020-01-01", "2024-01-01", "300", "350", "RENUNCIA");

    let (_, body) = post_calculate(router, request).await;
    let finiquito = &body["result"]["scenario_a"]["breakdown"]["finiquito"];

    assert_eq!(
        finiquito[0]["description"],
        "0.04 días proporcionales (1 días trabajados año actual)"
    );
    assert_eq!(
        finiquito[1]["description"],
        "0.03 días pendientes (Base: 12 días/año)"
    );
}

#[tokio::test]
async fn test_resignation_sixteen_years_with_pending_items_and_capped_premium() {
    let router = create_router_for_test();
    let mut request = create_request("2008-03-01", "2024-09-15", "800", "900", "RENUNCIA");
    request["pending_worked_days"] = json!(3);
    request["pending_overtime_hours"] = json!(5);

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["result"];
    assert_eq!(result["antiquity"]["years"], 16);
    assert_eq!(result["antiquity"]["days_partial"], 202);
    assert_eq!(result["antiquity"]["total_days"], 6042);

    let a = &result["scenario_a"];
    assert_eq!(
        concepts(&a["breakdown"]["finiquito"]),
        pairs(&[
            ("Aguinaldo Proporcional", "6641.10"),
            ("Vacaciones Proporcionales", "7969.32"),
            ("Prima Vacacional", "1992.33"),
            ("Días Trabajados Pendientes", "2400.00"),
            ("Horas Extra (Est. Dobles)", "1000.00"),
            ("Prima de Antigüedad", "98895.46"),
        ])
    );
    let premium = a["breakdown"]["finiquito"][5]["description"].as_str().unwrap();
    assert!(premium.starts_with("198.64 días (Topado a 2xSMG: $497.86/día)"));
    assert!(premium.ends_with("Renuncia con 15+ años de antigüedad"));
    assert_amount(&a["total"], "118898.21");
    assert!(result.get("scenario_b").is_none());
}

#[tokio::test]
async fn test_resignation_fourteen_years_has_no_premium() {
    let router = create_router_for_test();
    // 5114 days: 14 years and 4 days
    let request = create_request("2010-01-01", "2024-01-02", "500", "550", "RENUNCIA");

    let (_, body) = post_calculate(router, request).await;
    let result = &body["result"];

    assert_eq!(result["antiquity"]["years"], 14);
    let names: Vec<String> = concepts(&result["scenario_a"]["breakdown"]["finiquito"])
        .into_iter()
        .map(|(concept, _)| concept)
        .collect();
    assert!(!names.contains(&"Prima de Antigüedad".to_string()));
}

#[tokio::test]
async fn test_resignation_vacation_premium_on_half_cent() {
    let router = create_router_for_test();
    let request = create_request("2002-08-14", "2003-04-27", "993.28", "1100", "RENUNCIA");

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let a = &body["result"]["scenario_a"];
    assert_eq!(body["result"]["antiquity"]["total_days"], 256);
    assert_eq!(
        concepts(&a["breakdown"]["finiquito"]),
        pairs(&[
            ("Aguinaldo Proporcional", "10449.85"),
            ("Vacaciones Proporcionales", "4179.94"),
            ("Prima Vacacional", "1044.98"),
        ])
    );
    assert_amount(&a["total"], "15674.77");
}

// =============================================================================
// SECTION 2: Justified dismissal
// =============================================================================

#[tokio::test]
async fn test_justified_dismissal_pays_premium_only() {
    let router = create_router_for_test();
    let request = create_request(
        "2021-06-15",
        "2024-02-10",
        "450",
        "520",
        "DESPIDO_JUSTIFICADO",
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let a = &body["result"]["scenario_a"];
    assert_eq!(a["name"], "Liquidación / Finiquito");
    assert_eq!(
        concepts(&a["breakdown"]["finiquito"]),
        pairs(&[
            ("Aguinaldo Proporcional", "4438.36"),
            ("Vacaciones Proporcionales", "2367.12"),
            ("Prima Vacacional", "591.78"),
            ("Prima de Antigüedad", "14350.68"),
        ])
    );
    assert_amount(&a["total"], "21747.94");
    assert!(body["result"].get("scenario_b").is_none());
}

// =============================================================================
// SECTION 3: Unjustified dismissal
// =============================================================================

#[tokio::test]
async fn test_unjustified_dismissal_two_months_back_pay() {
    let router = create_router_for_test();
    let mut request = create_request(
        "2020-01-01",
        "2024-01-01",
        "300",
        "350",
        "DESPIDO_INJUSTIFICADO",
    );
    request["months_of_lost_wages"] = json!(2);

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["result"];

    let a = &result["scenario_a"];
    assert_eq!(a["name"], "Escenario A (Conciliación/Mínimo)");
    assert_eq!(
        concepts(&a["breakdown"]["liquidacion"]),
        pairs(&[
            ("Indemnización Constitucional", "31500.00"),
            ("Salarios Vencidos", "21000.00"),
        ])
    );
    assert_amount(&a["subtotal_finiquito"], "14434.52");
    assert_amount(&a["total"], "66934.52");

    let b = &result["scenario_b"];
    assert_eq!(b["name"], "Escenario B (Juicio/Máximo)");
    assert_eq!(b["breakdown"]["finiquito"], a["breakdown"]["finiquito"]);
    assert_eq!(
        concepts(&b["breakdown"]["liquidacion"]),
        pairs(&[
            ("Indemnización Constitucional", "31500.00"),
            ("Salarios Vencidos", "21000.00"),
            ("Indemnización 20 días/año", "28019.18"),
        ])
    );
    assert_eq!(
        b["breakdown"]["liquidacion"][2]["description"],
        "Negativa de reinstalación (80.05 días)"
    );
    assert_amount(&b["total"], "94953.70");
}

#[tokio::test]
async fn test_unjustified_dismissal_without_back_pay() {
    let router = create_router_for_test();
    let request = create_request(
        "2021-06-15",
        "2024-02-10",
        "450",
        "520",
        "DESPIDO_INJUSTIFICADO",
    );

    let (_, body) = post_calculate(router, request).await;
    let result = &body["result"];

    assert_eq!(
        concepts(&result["scenario_a"]["breakdown"]["liquidacion"]),
        pairs(&[("Indemnización Constitucional", "46800.00")])
    );
    assert_amount(&result["scenario_a"]["total"], "68547.94");
    assert_amount(&result["scenario_b"]["total"], "96186.30");
}

#[tokio::test]
async fn test_unjustified_dismissal_long_service() {
    let router = create_router_for_test();
    let request = create_request(
        "2008-03-01",
        "2024-09-15",
        "800",
        "900",
        "DESPIDO_INJUSTIFICADO",
    );

    let (_, body) = post_calculate(router, request).await;
    let result = &body["result"];

    let b_liquidacion = concepts(&result["scenario_b"]["breakdown"]["liquidacion"]);
    assert_eq!(
        b_liquidacion,
        pairs(&[
            ("Indemnización Constitucional", "81000.00"),
            ("Indemnización 20 días/año", "297961.64"),
        ])
    );
    let premium = result["scenario_a"]["breakdown"]["finiquito"][3]["description"]
        .as_str()
        .unwrap();
    assert!(premium.ends_with("Aplica por Despido"));
}

// =============================================================================
// SECTION 4: Audit trace and warnings
// =============================================================================

#[tokio::test]
async fn test_audit_trace_cites_articles() {
    let router = create_router_for_test();
    let mut request = create_request(
        "2020-01-01",
        "2024-01-01",
        "300",
        "350",
        "DESPIDO_INJUSTIFICADO",
    );
    request["months_of_lost_wages"] = json!(2);

    let (_, body) = post_calculate(router, request).await;
    let result = &body["result"];

    for clause in ["Art. 158", "Art. 87", "Art. 76", "Art. 80", "Art. 162", "Art. 48", "Art. 50"] {
        assert_has_audit_step_with_clause(result, clause);
    }
    let steps = result["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps[0]["rule_id"], "antiquity");
    assert_eq!(steps.len(), 10);
}

#[tokio::test]
async fn test_statutory_floors_are_advisory() {
    let router = create_router_for_test();
    let mut request = create_request("2020-01-01", "2024-01-01", "300", "350", "RENUNCIA");
    request["base_aguinaldo_days"] = json!(10);
    request["vacation_premium_percentage"] = json!(20);
    request["months_of_lost_wages"] = json!(1);

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        warning_codes(&body["result"]),
        vec![
            "AGUINALDO_BELOW_STATUTORY_FLOOR",
            "VACATION_PREMIUM_BELOW_STATUTORY_FLOOR",
            "LOST_WAGES_IGNORED",
        ]
    );
    assert_amount(
        &body["result"]["scenario_a"]["breakdown"]["finiquito"][0]["amount"],
        "8.22",
    );
}

#[tokio::test]
async fn test_reversed_dates_are_tolerated() {
    let router = create_router_for_test();
    let request = create_request("2024-01-01", "2020-01-01", "300", "350", "RENUNCIA");

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["antiquity"]["total_days"], 1461);
    assert_eq!(
        warning_codes(&body["result"]),
        vec!["END_DATE_BEFORE_START_DATE"]
    );
}

// =============================================================================
// SECTION 5: Export and health
// =============================================================================

#[tokio::test]
async fn test_csv_export_matches_calculation() {
    let router = create_router_for_test();
    let mut request = create_request(
        "2020-01-01",
        "2024-01-01",
        "300",
        "350",
        "DESPIDO_INJUSTIFICADO",
    );
    request["months_of_lost_wages"] = json!(2);

    let (status, bytes) = post(router, "/export/csv", request).await;

    assert_eq!(status, StatusCode::OK);
    let csv = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[1], "Empresa,Comercializadora del Norte");
    assert_eq!(lines[2], "Trabajador,Juan Pérez");
    assert_eq!(lines[8], "Causa,DESPIDO_INJUSTIFICADO");
    assert!(lines.contains(&"TOTAL A PAGAR,66934.52,"));
    assert!(lines.contains(
        &"Indemnización 20 días/año,28019.18,Negativa de reinstalación (80.05 días)"
    ));
    assert_eq!(lines.last(), Some(&"TOTAL MÁXIMO,94953.70,"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = create_router_for_test();

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"status": "ok", "law_code": "LFT2015"}));
}

// =============================================================================
// SECTION 6: Error cases
// =============================================================================

#[tokio::test]
async fn test_invalid_start_date_returns_400() {
    let router = create_router_for_test();
    let request = create_request("2023-13-01", "2024-01-01", "300", "350", "RENUNCIA");

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE");
    assert!(body["message"].as_str().unwrap().contains("start_date"));
}

#[tokio::test]
async fn test_unknown_cause_returns_400() {
    let router = create_router_for_test();
    let request = create_request("2020-01-01", "2024-01-01", "300", "350", "JUBILACION");

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_dates_returns_400() {
    let router = create_router_for_test();

    let (status, body) = post_calculate(router, json!({"cause": "RENUNCIA"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_export_with_invalid_date_returns_400() {
    let router = create_router_for_test();
    let request = create_request("2020-01-01", "mañana", "300", "350", "RENUNCIA");

    let (status, bytes) = post(router, "/export/csv", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "INVALID_DATE");
}

#[tokio::test]
async fn test_out_of_range_salary_returns_422() {
    let router = create_router_for_test();
    let request = create_request(
        "2020-01-01",
        "2024-01-01",
        "300",
        "1000000000000000000000000000",
        "DESPIDO_INJUSTIFICADO",
    );

    let (status, body) = post_calculate(router, request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "CALCULATION_ERROR");
    assert!(body["details"].as_str().unwrap().contains("Indemnización Constitucional"));
}

#[tokio::test]
async fn test_export_with_out_of_range_salary_returns_422() {
    let router = create_router_for_test();
    let request = create_request(
        "2020-01-01",
        "2024-01-01",
        "300",
        "1000000000000000000000000000",
        "DESPIDO_INJUSTIFICADO",
    );

    let (status, bytes) = post(router, "/export/csv", request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "CALCULATION_ERROR");
}
