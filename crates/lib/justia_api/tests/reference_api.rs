//! Integration tests for the read-only reference endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{app, get};

#[tokio::test]
async fn root_advertises_endpoints() {
    let resp = get(app(), "/").await;
    assert_eq!(resp.status, StatusCode::OK);

    let json = resp.json();
    assert_eq!(json["service"], "JUSTIA API");
    assert_eq!(json["status"], "online");
    assert_eq!(json["version"], justia_core::version());
    let endpoints = json["endpoints"].as_array().expect("endpoints array");
    assert_eq!(endpoints.len(), 9);
    assert!(endpoints.contains(&Value::from("/api/legal-info/{case_type}/{state}")));
}

#[tokio::test]
async fn health_reports_mock_mode() {
    let json = get(app(), "/api/health").await.json();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["claude_available"], false);
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn states_are_listed_in_table_order() {
    let json = get(app(), "/api/states").await.json();
    let states = json["states"].as_array().expect("states array");
    assert_eq!(json["total"], states.len());
    assert_eq!(states.len(), 6);
    assert_eq!(states[0]["id"], "maharashtra");
    assert_eq!(states[0]["high_court"], "Bombay High Court");
    assert_eq!(states[0]["legal_aid_phone"], "1800-22-6000");
}

#[tokio::test]
async fn case_types_have_summary_fields() {
    let json = get(app(), "/api/case-types").await.json();
    let case_types = json["case_types"].as_array().expect("case_types array");
    assert_eq!(case_types.len(), 4);
    let rental = &case_types[0];
    assert_eq!(rental["id"], "rental_deposit");
    assert_eq!(rental["icon"], "🏠");
    assert_eq!(rental["success_rate"], 74);
    assert_eq!(rental["avg_days"], 95);
}

#[tokio::test]
async fn rental_legal_info_carries_state_rent_act() {
    let resp = get(app(), "/api/legal-info/rental_deposit/delhi").await;
    assert_eq!(resp.status, StatusCode::OK);

    let json = resp.json();
    assert_eq!(json["state"]["relevant_act"], "Delhi Rent Control Act, 1958");
    assert_eq!(json["state"]["name"], "Delhi");
    assert_eq!(json["case_type"]["id"], "rental_deposit");
    assert_eq!(json["case_type"]["steps"][0]["step"], 1);
    assert_eq!(json["case_type"]["rules"]["return_days"], 30);
    assert_eq!(json["case_type"]["limitation_period_years"], 3);
    assert!(json["case_type"]["forums"].is_object());
    assert_eq!(json["last_updated"], "2025-01-01");
    assert_eq!(json["sources"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn non_rental_legal_info_has_no_relevant_act() {
    let json = get(app(), "/api/legal-info/labour_wage/delhi").await.json();
    assert!(json["state"]["relevant_act"].is_null());
    assert!(json["case_type"]["forums"].is_null());
    assert!(!json["case_type"]["key_rights"].as_array().expect("key_rights").is_empty());
}

#[tokio::test]
async fn unknown_case_type_is_404() {
    let resp = get(app(), "/api/legal-info/unknown_type/delhi").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    let json = resp.json();
    assert_eq!(json["error"], "not_found");
    assert_eq!(json["message"], "Case type 'unknown_type' not found");
}

#[tokio::test]
async fn unknown_state_is_404() {
    let resp = get(app(), "/api/legal-info/rental_deposit/atlantis").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json()["message"], "State 'atlantis' not found");
}

#[tokio::test]
async fn case_type_is_checked_before_state() {
    let resp = get(app(), "/api/legal-info/piracy/atlantis").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json()["message"], "Case type 'piracy' not found");
}

#[tokio::test]
async fn documents_checklist() {
    let resp = get(app(), "/api/documents/consumer_complaint").await;
    assert_eq!(resp.status, StatusCode::OK);
    let json = resp.json();
    assert_eq!(json["case_type"], "consumer_complaint");
    assert!(!json["documents"].as_array().expect("documents").is_empty());
    assert!(json["tip"].as_str().expect("tip").starts_with("Collect ALL documents"));
}

#[tokio::test]
async fn unknown_documents_is_404() {
    let resp = get(app(), "/api/documents/piracy").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json()["error"], "not_found");
}

#[tokio::test]
async fn stats_are_jittered_within_bounds() {
    let json = get(app(), "/api/stats").await.json();
    let total = json["total_queries"].as_i64().expect("total_queries");
    let active = json["active_users"].as_i64().expect("active_users");
    assert!((128_400..=128_650).contains(&total), "{total}");
    assert!((45_220..=45_280).contains(&active), "{active}");
    assert_eq!(json["resolved_queries"], 94_210);
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn cors_allows_any_origin() {
    use axum::body::Body;
    use axum::http::Request;

    let req = Request::builder()
        .uri("/api/states")
        .header("origin", "https://example.org")
        .body(Body::empty())
        .unwrap();
    let resp = tower::ServiceExt::oneshot(app(), req).await.expect("request");
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
