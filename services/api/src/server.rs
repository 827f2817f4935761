use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionStore};
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use telecom_pm::config::AppConfig;
use telecom_pm::dashboards::sheets::{data_origin, initialize_sheet, StubSheetConnector};
use telecom_pm::dashboards::{DataSource, SampleData};
use telecom_pm::error::AppError;
use telecom_pm::session::SessionService;
use telecom_pm::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    // The stub connector never yields a sheet, so dashboards stay on sample data.
    let sheet = initialize_sheet(&StubSheetConnector, config.data.sheet_id.as_deref());
    let origin = data_origin(sheet.as_ref());
    let source: Arc<dyn DataSource> = Arc::new(SampleData);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        data_origin: origin,
        source: source.clone(),
    };

    let sessions = Arc::new(InMemorySessionStore::default());
    let session_service = Arc::new(SessionService::new(sessions, source));

    let app = with_dashboard_routes(session_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(%addr, data_origin = origin.label(), "telecom dashboards ready");

    axum::serve(listener, app).await?;
    Ok(())
}
