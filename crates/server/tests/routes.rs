//! Route tests driving the router in-process

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use data_facade::{CsvHistoryStore, StoreConfig};
use logiops_server::{app, AppState};
use monitor::MonitorService;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

fn router(dir: &TempDir, bootstrap_rows: usize) -> Router {
    let config = StoreConfig::builder()
        .path(dir.path().join("history.csv"))
        .bootstrap_rows(bootstrap_rows)
        .build();
    let service = MonitorService::new(CsvHistoryStore::new(config));
    service.init().unwrap();
    app(AppState::new(service))
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri).await
}

#[tokio::test]
async fn test_root_and_health() {
    let dir = TempDir::new().unwrap();
    let app = router(&dir, 20);

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");

    let (_, body) = get(&app, "/health/live").await;
    assert_eq!(body["status"], "alive");

    let (_, body) = get(&app, "/health/ready").await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["history_rows"], 20);
    assert_eq!(body["scheduler"]["ticks"], 0);
    assert!(body["scheduler"]["last_timestamp"].is_null());
}

#[tokio::test]
async fn test_data_respects_limit() {
    let dir = TempDir::new().unwrap();
    let app = router(&dir, 20);

    let (_, body) = get(&app, "/data?limit=5").await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows[0]["timestamp"].is_string());

    let (_, body) = get(&app, "/data").await;
    assert_eq!(body.as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_append_via_get_and_post() {
    let dir = TempDir::new().unwrap();
    let app = router(&dir, 20);

    let (status, first) = send(&app, Method::POST, "/append").await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = get(&app, "/append").await;
    assert!(second["timestamp"].as_str().unwrap() > first["timestamp"].as_str().unwrap());

    let (_, body) = get(&app, "/data").await;
    assert_eq!(body.as_array().unwrap().len(), 22);
}

#[tokio::test]
async fn test_anomalies_report_status() {
    let dir = TempDir::new().unwrap();
    let app = router(&dir, 20);

    let (status, body) = get(&app, "/anomalies?threshold=2.5&window=10").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["status"] == "found" || body["status"] == "no_anomalies");
    assert!(body["anomalies"].is_array());
}

#[tokio::test]
async fn test_anomalies_bad_parameters() {
    let dir = TempDir::new().unwrap();
    let app = router(&dir, 20);

    let (status, body) = get(&app, "/anomalies?window=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = get(&app, "/anomalies?threshold=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_forecast_endpoints() {
    let dir = TempDir::new().unwrap();
    let app = router(&dir, 20);

    let (_, body) = get(&app, "/forecast").await;
    assert_eq!(body.as_array().unwrap().len(), 24);

    let (_, body) = get(&app, "/forecast?hours=3").await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    for row in rows {
        let congestion = row["congestion_level"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&congestion));
    }

    let (status, body) = get(&app, "/forecast_one_hour").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, rows[0]);
}

#[tokio::test]
async fn test_short_history_returns_error_body() {
    let dir = TempDir::new().unwrap();
    let app = router(&dir, 3);

    let (status, body) = get(&app, "/forecast").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["error"].is_string());

    let (status, body) = get(&app, "/forecast_one_hour").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["error"].is_string());

    let (status, body) = get(&app, "/optimize").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "stable");
    assert!(body["forecast_next"].is_null());
}

#[tokio::test]
async fn test_optimize_shape() {
    let dir = TempDir::new().unwrap();
    let app = router(&dir, 20);

    let (status, body) = get(&app, "/optimize").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["status"] == "stable" || body["status"] == "action_required");
    assert!(body["latest"].is_object());
    assert!(body["forecast_next"].is_object());
    assert!(body["suggestions"].is_object());
    assert!(body["urgent_alerts"].is_array());
}

/// 30 half-hourly rows from 2024-07-01 00:00 with a sorting spike at row 20.
fn spiky_router(dir: &TempDir) -> Router {
    let mut csv =
        String::from("timestamp,sorting_capacity,staff_available,vehicles_ready,congestion_level\n");
    for i in 0..30 {
        let sorting: u64 = if i == 20 {
            4_000_000_000
        } else if i % 2 == 1 {
            101
        } else {
            99
        };
        csv.push_str(&format!(
            "2024-07-01 {:02}:{:02}:00,{},40,12,0.3\n",
            i / 2,
            (i % 2) * 30,
            sorting
        ));
    }
    let path = dir.path().join("history.csv");
    std::fs::write(&path, csv).unwrap();

    let service = MonitorService::new(CsvHistoryStore::new(StoreConfig::new(path)));
    service.init().unwrap();
    app(AppState::new(service))
}

#[tokio::test]
async fn test_forecast_horizon_limit() {
    let dir = TempDir::new().unwrap();
    let app = router(&dir, 20);

    let (status, body) = get(&app, "/forecast?hours=168").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 168);

    let (status, body) = get(&app, "/forecast?hours=169").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("at most 168"));

    let (status, _) = get(&app, &format!("/forecast?hours={}", usize::MAX)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_spike_raises_critical_alert() {
    let dir = TempDir::new().unwrap();
    let app = spiky_router(&dir);

    let (status, body) = get(&app, "/optimize").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "action_required");
    let alerts = body["urgent_alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["id"], "sorting_capacity@202407011000");
    assert_eq!(alerts[0]["level"], "critical");
}

#[tokio::test]
async fn test_dismiss_alert_twice() {
    let dir = TempDir::new().unwrap();
    let app = spiky_router(&dir);
    let uri = "/alerts/sorting_capacity@202407011000/dismiss";

    let (status, body) = send(&app, Method::POST, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "dismissed");
    assert_eq!(body["alert_id"], "sorting_capacity@202407011000");

    let (status, body) = send(&app, Method::POST, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "already_dismissed");

    let (status, body) = get(&app, "/alerts").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_dismiss_unknown_alert_is_not_found() {
    let dir = TempDir::new().unwrap();
    let app = spiky_router(&dir);

    let (status, body) = send(&app, Method::POST, "/alerts/staff_available@202401010000/dismiss").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unknown alert: staff_available@202401010000");

    // The real alert is still active
    let (_, body) = get(&app, "/alerts").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}
