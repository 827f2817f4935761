use super::common::*;
use crate::dashboards::SampleData;
use crate::session::{session_router, SessionService};
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn login_route_creates_a_session() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/sessions",
            json!({ "role": "Billing Team" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["role"], "billing_team");
    assert_eq!(payload["role_label"], "Billing Team");
    assert_eq!(payload["user_email"], "Billing Team@company.com");
    assert_eq!(payload["display_name"], "Billing Team");
}

#[tokio::test]
async fn login_route_requires_a_role() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request("POST", "/api/v1/sessions", json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("select a role"));
}

#[tokio::test]
async fn login_route_rejects_unknown_roles() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/sessions",
            json!({ "role": "CEO" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dashboard_route_renders_the_session_role() {
    let (service, _) = build_service();
    let record = service.login("Field TL").expect("login succeeds");
    let router = router_with_service(service);

    let response = router
        .oneshot(empty_request(
            "GET",
            &format!("/api/v1/sessions/{}/dashboard", record.id),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["kind"], "field_operations");
    assert_eq!(payload["queue"]["heading"], "Daily Plans");
    assert_eq!(payload["queue"]["items"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn switched_session_renders_nothing() {
    let (service, _) = build_service();
    let record = service.login("GM").expect("login succeeds");
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/v1/sessions/{}/role", record.id),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload["role"].is_null());

    let response = router
        .oneshot(empty_request(
            "GET",
            &format!("/api/v1/sessions/{}/dashboard", record.id),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn select_role_route_updates_the_session() {
    let (service, _) = build_service();
    let record = service.login("GM").expect("login succeeds");
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/sessions/{}/role", record.id),
            json!({ "role": "IM" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["role_label"], "IM");
}

#[tokio::test]
async fn unknown_session_returns_not_found() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(empty_request("GET", "/api/v1/sessions/session-missing"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_outage_surfaces_as_server_error() {
    let service = SessionService::new(Arc::new(UnavailableStore), Arc::new(SampleData));
    let router = session_router(Arc::new(service));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/sessions",
            json!({ "role": "PM" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("store offline"));
}
