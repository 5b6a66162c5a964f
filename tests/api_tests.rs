use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use carbon_dashboard::{app, models::factors::EmissionFactors, state::AppState};

// Función helper para crear el servidor de test
fn create_test_server() -> TestServer {
    TestServer::new(app(AppState::default())).unwrap()
}

fn close(a: &Value, b: f64) -> bool {
    (a.as_f64().unwrap() - b).abs() < 1e-6
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "carbon_dashboard");
}

#[tokio::test]
async fn test_calculate_campus_example() {
    let server = create_test_server();
    let response = server
        .post("/api/calculate")
        .json(&json!({
            "dieselLiters": 1200,
            "gasM3": 500,
            "lpgKg": 0,
            "vehicleDistanceKm": 0,
            "electricityKWh": 24000,
            "solarKWh": 12000
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(close(&body["scope1"]["diesel"], 4428.0));
    assert!(close(&body["scope1"]["naturalGas"], 950.0));
    assert!(close(&body["scope1"]["total"], 5378.0));
    assert!(close(&body["scope2"]["electricity"], 23160.0));
    assert!(close(&body["scope2"]["solarOffset"], 11580.0));
    assert!(close(&body["scope2"]["net"], 11580.0));
    assert!(close(&body["scope3"]["total"], 0.0));
    assert!(close(&body["total"], 16958.0));
}

#[tokio::test]
async fn test_empty_object_gives_zeros() {
    let server = create_test_server();
    let response = server.post("/api/calculate").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "scope1": { "diesel": 0.0, "naturalGas": 0.0, "lpg": 0.0, "vehicles": 0.0, "total": 0.0 },
            "scope2": { "electricity": 0.0, "solarOffset": 0.0, "net": 0.0 },
            "scope3": { "waste": 0.0, "total": 0.0 },
            "total": 0.0
        })
    );
}

#[tokio::test]
async fn test_malformed_fields_are_zeroed() {
    let server = create_test_server();
    let response = server
        .post("/api/calculate")
        .json(&json!({
            "dieselLiters": "not a number",
            "gasM3": "10",
            "foodWaste": null,
            "plasticWaste": [1, 2, 3],
            "vehicleType": "Flying Carpet",
            "vehicleDistanceKm": 500
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(close(&body["scope1"]["diesel"], 0.0));
    assert!(close(&body["scope1"]["naturalGas"], 19.0));
    assert!(close(&body["scope1"]["vehicles"], 0.0));
    assert!(close(&body["scope3"]["waste"], 0.0));
}

#[tokio::test]
async fn test_zero_vehicle_type_uses_default_vehicle() {
    let server = create_test_server();
    let response = server
        .post("/api/calculate")
        .json(&json!({ "vehicleType": 0, "vehicleDistanceKm": 100 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(close(&body["scope1"]["vehicles"], 19.2));
}

#[tokio::test]
async fn test_out_of_range_literal_is_rejected_by_the_parser() {
    // El parser JSON no acepta literales fuera de f64; en string sí se toleran
    let server = create_test_server();
    let response = server
        .post("/api/calculate")
        .text(r#"{"dieselLiters":1e400}"#)
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/calculate")
        .json(&json!({ "dieselLiters": "1e400", "gasM3": 10 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(close(&body["scope1"]["diesel"], 0.0));
    assert!(close(&body["scope1"]["naturalGas"], 19.0));
}

#[tokio::test]
async fn test_negative_scope2_is_not_clamped() {
    let server = create_test_server();
    let response = server
        .post("/api/calculate")
        .json(&json!({ "electricityKWh": 100, "solarKWh": 400, "glassWaste": 10 }))
        .await;

    let body: Value = response.json();
    assert!(close(&body["scope2"]["net"], -289.5));
    assert!(close(&body["total"], -289.5 + 14.37));
}

#[tokio::test]
async fn test_invalid_payload_is_bad_request() {
    let server = create_test_server();

    for payload in ["{ not json", "[1, 2, 3]", "null", "42"] {
        let response = server.post("/api/calculate").text(payload).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{payload}");

        let body: Value = response.json();
        assert_eq!(body, json!({ "error": "Invalid input or server error" }));
    }
}

#[tokio::test]
async fn test_error_body_does_not_leak_factors() {
    let server = create_test_server();
    let response = server.post("/api/calculate").text("oops").await;
    let text = response.text();
    assert!(!text.contains("0.965"));
    assert!(!text.contains("Small Petrol Car"));
}

#[tokio::test]
async fn test_custom_factor_table() {
    let mut factors = EmissionFactors::default();
    factors.electricity = 0.615;
    factors.fuels.diesel = 2.68;
    let state = AppState::new(Default::default(), factors);
    let server = TestServer::new(app(state)).unwrap();

    let response = server
        .post("/api/calculate")
        .json(&json!({ "dieselLiters": 100, "electricityKWh": 1000 }))
        .await;

    let body: Value = response.json();
    assert!(close(&body["scope1"]["diesel"], 268.0));
    assert!(close(&body["scope2"]["electricity"], 615.0));
    assert!(close(&body["total"], 883.0));
}

#[tokio::test]
async fn test_report_download() {
    let server = create_test_server();
    let response = server
        .post("/api/report")
        .json(&json!({
            "regionId": "carbon-report",
            "month": "October 2026",
            "totalEmissions": 16958,
            "scope1": 5378,
            "scope2": 11580,
            "scope3": 0
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type"), "application/pdf");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"Carbon_Report_October_2026.pdf\""
    );
    assert!(response.as_bytes().starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_report_month_with_control_characters() {
    let server = create_test_server();
    let response = server
        .post("/api/report")
        .json(&json!({ "month": "Oct\u{1}", "scope1": 1 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"Carbon_Report_Oct.pdf\""
    );
    assert!(response.as_bytes().starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_report_month_cannot_inject_header_parameters() {
    let server = create_test_server();
    let response = server
        .post("/api/report")
        .json(&json!({ "month": "Oct\"; x=\"y", "scope1": 1 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"Carbon_Report_Oct;_x=y.pdf\""
    );
}

#[tokio::test]
async fn test_report_unknown_region_is_silently_aborted() {
    let server = create_test_server();
    let response = server
        .post("/api/report")
        .json(&json!({ "regionId": "does-not-exist", "month": "May" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_report_invalid_payload_is_bad_request() {
    let server = create_test_server();
    let response = server.post("/api/report").text("[]").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard_datasets() {
    let server = create_test_server();
    let response = server.get("/api/dashboard").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["campuses"].as_array().unwrap().len(), 2);
    assert_eq!(body["campuses"][0]["campus"], "Superior");
    assert_eq!(body["scope1Monthly"].as_array().unwrap().len(), 12);
    assert_eq!(body["comparison"][0]["label"], "Generator Diesel");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = create_test_server();
    let response = server.get("/api/nothing-here").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
