//! # logiops-server
//!
//! HTTP API for the logistics KPI monitor. Serves history, anomaly,
//! forecast and optimization reports, and runs the background task that
//! appends a generated row every interval.

use axum::{
    routing::{get, post},
    Router,
};
use data_facade::CsvHistoryStore;
use monitor::MonitorService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod routes;
mod scheduler;
mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorResponse, ServerError};
pub use scheduler::SchedulerState;
pub use state::AppState;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides
/// `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // A second install (e.g. from tests) is ignored
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init();
}

/// Build the router with CORS and HTTP tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(routes::liveness))
        .route("/health/ready", get(routes::readiness))
        .route("/health", get(routes::liveness))
        // KPI endpoints
        .route("/data", get(routes::data))
        .route("/append", get(routes::append).post(routes::append))
        .route("/anomalies", get(routes::anomalies))
        .route("/forecast", get(routes::forecast))
        .route("/forecast_one_hour", get(routes::forecast_one_hour))
        .route("/optimize", get(routes::optimize))
        .route("/alerts", get(routes::alerts))
        .route("/alerts/:alert_id/dismiss", post(routes::dismiss_alert))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Initialize the store, start the scheduler and serve until shutdown.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.addr()?;

    let service = MonitorService::new(CsvHistoryStore::new(config.store_config()));
    service.init()?;
    let state = AppState::new(service);

    scheduler::spawn(state.clone(), config.generate_interval);
    tracing::info!(
        interval_secs = config.generate_interval.as_secs(),
        path = %config.history_path.display(),
        "row scheduler started"
    );

    tracing::info!("logiops-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
