use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;

use super::service::SessionService;
use super::store::{SessionId, SessionStore, SessionView};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct RoleSelection {
    #[serde(default)]
    pub role: String,
}

/// Router builder exposing login, role switching, and per-session dashboards.
pub fn session_router<S>(service: Arc<SessionService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/sessions", post(login_handler::<S>))
        .route("/api/v1/sessions/:session_id", get(session_handler::<S>))
        .route(
            "/api/v1/sessions/:session_id/role",
            put(select_role_handler::<S>).delete(switch_role_handler::<S>),
        )
        .route(
            "/api/v1/sessions/:session_id/dashboard",
            get(dashboard_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn login_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Json(selection): Json<RoleSelection>,
) -> Result<(StatusCode, Json<SessionView>), AppError>
where
    S: SessionStore + 'static,
{
    let record = service.login(&selection.role)?;
    Ok((StatusCode::CREATED, Json(record.view(service.source()))))
}

pub(crate) async fn session_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionView>, AppError>
where
    S: SessionStore + 'static,
{
    let record = service.get(&SessionId(session_id))?;
    Ok(Json(record.view(service.source())))
}

pub(crate) async fn select_role_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
    Json(selection): Json<RoleSelection>,
) -> Result<Json<SessionView>, AppError>
where
    S: SessionStore + 'static,
{
    let record = service.select_role(&SessionId(session_id), &selection.role)?;
    Ok(Json(record.view(service.source())))
}

pub(crate) async fn switch_role_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionView>, AppError>
where
    S: SessionStore + 'static,
{
    let record = service.switch_role(&SessionId(session_id))?;
    Ok(Json(record.view(service.source())))
}

pub(crate) async fn dashboard_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Result<Response, AppError>
where
    S: SessionStore + 'static,
{
    let response = match service.dashboard(&SessionId(session_id))? {
        Some(view) => (StatusCode::OK, Json(view)).into_response(),
        // Logged out sessions render nothing.
        None => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}
