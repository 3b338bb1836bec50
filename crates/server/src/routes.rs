//! API route handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use data_facade::{format_timestamp, KpiRow};
use monitor::prelude::{AnomalyReport, RollingZScoreConfig};
use monitor::{OptimizationReport, DEFAULT_HISTORY_LIMIT};
use optimizer_facade::UrgentAlert;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Service banner.
pub async fn root() -> Json<Value> {
    Json(json!({ "status": "running" }))
}

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<Value> {
    Json(json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - can the history store be read?
pub async fn readiness(State(state): State<AppState>) -> Json<Value> {
    let scheduler = state.scheduler.read().await.clone();
    let scheduler = json!({
        "ticks": scheduler.ticks,
        "failures": scheduler.failures,
        "last_timestamp": scheduler.last_row.as_ref().map(|row| format_timestamp(&row.timestamp)),
    });

    match state.with_service(|service| service.row_count()).await {
        Ok(rows) => Json(json!({
            "status": "ready",
            "version": env!("CARGO_PKG_VERSION"),
            "history_rows": rows,
            "scheduler": scheduler,
        })),
        Err(err) => Json(json!({
            "status": "degraded",
            "version": env!("CARGO_PKG_VERSION"),
            "error": err.to_string(),
            "scheduler": scheduler,
        })),
    }
}

#[derive(Debug, Deserialize)]
pub struct DataQuery {
    pub limit: Option<usize>,
}

pub async fn data(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> ApiResult<Vec<KpiRow>> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let rows = state
        .with_service(move |service| service.history(limit))
        .await?;
    Ok(Json(rows))
}

pub async fn append(State(state): State<AppState>) -> ApiResult<KpiRow> {
    let row = state.with_service(|service| service.append()).await?;
    Ok(Json(row))
}

#[derive(Debug, Deserialize)]
pub struct AnomalyQuery {
    pub threshold: Option<f64>,
    pub window: Option<usize>,
}

pub async fn anomalies(
    State(state): State<AppState>,
    Query(query): Query<AnomalyQuery>,
) -> ApiResult<AnomalyReport> {
    let defaults = RollingZScoreConfig::default();
    let threshold = query.threshold.unwrap_or(defaults.threshold);
    let window = query.window.unwrap_or(defaults.window);
    let report = state
        .with_service(move |service| service.anomalies(threshold, window))
        .await?;
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub hours: Option<usize>,
}

pub async fn forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> ApiResult<Vec<KpiRow>> {
    let hours = query
        .hours
        .unwrap_or(state.service.forecast_config().default_horizon);
    let rows = state
        .with_service(move |service| service.forecast(hours))
        .await?;
    Ok(Json(rows))
}

pub async fn forecast_one_hour(State(state): State<AppState>) -> ApiResult<KpiRow> {
    let row = state.with_service(|service| service.forecast_next()).await?;
    Ok(Json(row))
}

pub async fn optimize(State(state): State<AppState>) -> ApiResult<OptimizationReport> {
    let ledger = state.ledger.read().await.clone();
    let report = state
        .with_service(move |service| service.optimize(&ledger))
        .await?;
    Ok(Json(report))
}

pub async fn alerts(State(state): State<AppState>) -> ApiResult<Vec<UrgentAlert>> {
    let ledger = state.ledger.read().await.clone();
    let alerts = state
        .with_service(move |service| service.alerts(&ledger))
        .await?;
    Ok(Json(alerts))
}

#[derive(Debug, Serialize)]
pub struct DismissResponse {
    pub status: &'static str,
    pub alert_id: String,
}

/// Dismiss a current alert. Unknown ids answer 404.
pub async fn dismiss_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
) -> ApiResult<DismissResponse> {
    // Held across the check so a concurrent dismissal cannot interleave
    let mut ledger = Arc::clone(&state.ledger).write_owned().await;
    let id = alert_id.clone();
    let newly = state
        .with_service(move |service| service.dismiss(&mut ledger, &id))
        .await?;

    Ok(Json(DismissResponse {
        status: if newly { "dismissed" } else { "already_dismissed" },
        alert_id,
    }))
}
