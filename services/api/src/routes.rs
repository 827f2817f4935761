use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use telecom_pm::dashboards::{
    classify_pending, perform_action, ActionOutcome, DashboardView, Role, RoleRouter, Severity,
};
use telecom_pm::error::AppError;
use telecom_pm::session::{session_router, SessionService, SessionStore};

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyRequest {
    pub(crate) status: String,
    #[serde(default)]
    pub(crate) days_pending: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClassifyResponse {
    pub(crate) status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) days_pending: Option<u32>,
    pub(crate) severity: Severity,
    pub(crate) severity_label: &'static str,
    pub(crate) marker: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RoleEntry {
    pub(crate) role: Role,
    pub(crate) label: &'static str,
    pub(crate) title: &'static str,
}

pub(crate) fn with_dashboard_routes<S>(service: Arc<SessionService<S>>) -> axum::Router
where
    S: SessionStore + 'static,
{
    session_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/roles", axum::routing::get(roles_endpoint))
        .route(
            "/api/v1/dashboards/:role",
            axum::routing::get(dashboard_endpoint),
        )
        .route(
            "/api/v1/dashboards/:role/actions/:item_key",
            axum::routing::post(action_endpoint),
        )
        .route(
            "/api/v1/status/classify",
            axum::routing::post(classify_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "data_origin": state.data_origin })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn roles_endpoint() -> Json<Vec<RoleEntry>> {
    Json(
        Role::ordered()
            .into_iter()
            .map(|role| RoleEntry {
                role,
                label: role.label(),
                title: role.title(),
            })
            .collect(),
    )
}

pub(crate) async fn dashboard_endpoint(
    Extension(state): Extension<AppState>,
    Path(role): Path<String>,
) -> Result<Json<DashboardView>, AppError> {
    RoleRouter
        .route(&role, state.source.as_ref())
        .map(Json)
        .ok_or(AppError::UnknownRole(role))
}

pub(crate) async fn action_endpoint(
    Extension(state): Extension<AppState>,
    Path((role, item_key)): Path<(String, String)>,
) -> Result<Json<ActionOutcome>, AppError> {
    let role = Role::parse(&role).ok_or(AppError::UnknownRole(role))?;
    let outcome = perform_action(role, &item_key, state.source.as_ref())?;
    Ok(Json(outcome))
}

pub(crate) async fn classify_endpoint(
    Json(payload): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let ClassifyRequest {
        status,
        days_pending,
    } = payload;

    let severity = classify_pending(&status, days_pending);
    Json(ClassifyResponse {
        status,
        days_pending,
        severity,
        severity_label: severity.label(),
        marker: severity.marker(),
    })
}
