//! End-to-end tests of the monitor service over a CSV store

use std::fs;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use monitor::prelude::*;
use tempfile::TempDir;

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 9, 2)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn service(dir: &TempDir) -> MonitorService {
    let store = CsvHistoryStore::new(StoreConfig::new(dir.path().join("history.csv")))
        .with_clock(fixed_now);
    MonitorService::new(store)
}

/// Write a history whose vehicles column spikes at row 20.
fn write_spiky_history(dir: &TempDir) {
    let start = fixed_now() - Duration::hours(15);
    let mut csv = String::from(
        "timestamp,sorting_capacity,staff_available,vehicles_ready,congestion_level\n",
    );
    for i in 0..30 {
        let ts = start + Duration::minutes(30 * i);
        let odd = i % 2 == 1;
        let vehicles = if i == 20 { 60 } else if odd { 13 } else { 12 };
        csv.push_str(&format!(
            "{},{},40,{},0.3\n",
            ts.format("%Y-%m-%d %H:%M:%S"),
            if odd { 101 } else { 99 },
            vehicles
        ));
    }
    fs::write(dir.path().join("history.csv"), csv).unwrap();
}

#[test]
fn test_fresh_store_supports_every_operation() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    service.init().unwrap();

    let history = service.history(DEFAULT_HISTORY_LIMIT).unwrap();
    assert_eq!(history.len(), 20);

    let forecast = service.forecast(24).unwrap();
    assert_eq!(forecast.len(), 24);
    assert_eq!(
        forecast[0].timestamp,
        history.last().unwrap().timestamp + Duration::hours(1)
    );

    let next = service.forecast_next().unwrap();
    assert_eq!(next, forecast[0]);

    let report = service.optimize(&AlertLedger::new()).unwrap();
    assert_eq!(report.latest.as_ref(), history.last());
    assert_eq!(report.forecast_next, Some(next));
}

#[test]
fn test_append_then_history() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    service.init().unwrap();

    let before = service.history(DEFAULT_HISTORY_LIMIT).unwrap();
    let row = service.append().unwrap();
    let after = service.history(DEFAULT_HISTORY_LIMIT).unwrap();

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), Some(&row));
    assert_eq!(
        row.timestamp,
        before.last().unwrap().timestamp + Duration::minutes(30)
    );
}

#[test]
fn test_anomaly_report_finds_spike() {
    let dir = TempDir::new().unwrap();
    write_spiky_history(&dir);
    let service = service(&dir);

    let report = service.anomalies(2.5, 10).unwrap();
    assert_eq!(report.status, AnomalyStatus::Found);
    assert_eq!(report.anomalies.len(), 1);
    assert_eq!(report.anomalies[0].variable, KpiField::VehiclesReady);

    let lenient = service.anomalies(3.0, 10).unwrap();
    assert_eq!(lenient.status, AnomalyStatus::NoAnomalies);
}

#[test]
fn test_dismissed_alert_leaves_feed_and_report() {
    let dir = TempDir::new().unwrap();
    write_spiky_history(&dir);
    let service = service(&dir);
    let mut ledger = AlertLedger::new();

    let alerts = service.alerts(&ledger).unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].variable, KpiField::VehiclesReady);

    let report = service.optimize(&ledger).unwrap();
    assert_eq!(report.status, OptimizationStatus::ActionRequired);
    assert_eq!(report.urgent_alerts, alerts);

    assert!(service.dismiss(&mut ledger, &alerts[0].id).unwrap());
    assert!(service.alerts(&ledger).unwrap().is_empty());
    assert!(service.optimize(&ledger).unwrap().urgent_alerts.is_empty());
}

#[test]
fn test_report_serializes_with_snake_case_status() {
    let dir = TempDir::new().unwrap();
    write_spiky_history(&dir);
    let report = service(&dir).optimize(&AlertLedger::new()).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["status"], "action_required");
    assert!(json["latest"]["timestamp"].is_string());
    assert_eq!(json["urgent_alerts"][0]["level"], "critical");
}
