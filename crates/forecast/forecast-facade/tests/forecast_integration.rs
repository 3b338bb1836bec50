//! Integration tests for the linear KPI forecaster

use chrono::{Duration, NaiveDate, NaiveDateTime};
use data_facade::{GeneratorConfig, KpiRow, SyntheticGenerator};
use forecast_facade::{ForecastConfig, ForecastError, KpiForecaster, LinearForecaster};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 4)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn synthetic_history(n: usize, seed: u64) -> Vec<KpiRow> {
    let generator = SyntheticGenerator::new(GeneratorConfig::default());
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| generator.generate_with(&mut rng, start() + Duration::minutes(30 * i as i64)))
        .collect()
}

#[test]
fn test_too_few_rows_cannot_train() {
    let history = synthetic_history(4, 1);
    let mut model = LinearForecaster::default();

    let err = model.fit(&history).unwrap_err();
    assert!(err.is_insufficient_data());
    assert!(!model.is_fitted());
    assert_eq!(
        model.forecast_one_hour(&history).unwrap_err(),
        ForecastError::NotFitted
    );
}

#[test]
fn test_one_hour_forecast_after_last_row() {
    let history = synthetic_history(20, 7);
    let mut model = LinearForecaster::default();
    model.fit(&history).unwrap();

    let next = model.forecast_one_hour(&history).unwrap();
    let last = history.last().unwrap();
    assert_eq!(next.timestamp, last.timestamp + Duration::hours(1));
    assert!((0.0..=1.0).contains(&next.congestion_level));
}

#[test]
fn test_period_forecast_is_hourly() {
    let history = synthetic_history(30, 11);
    let mut model = LinearForecaster::default();
    model.fit(&history).unwrap();

    let forecast = model.forecast_period(&history, 24).unwrap();
    assert_eq!(forecast.len(), 24);

    let last = history.last().unwrap().timestamp;
    for (i, row) in forecast.iter().enumerate() {
        assert_eq!(row.timestamp, last + Duration::hours(i as i64 + 1));
        assert!((0.0..=1.0).contains(&row.congestion_level));
    }
}

#[test]
fn test_zero_hours_is_empty() {
    let history = synthetic_history(10, 3);
    let mut model = LinearForecaster::default();
    model.fit(&history).unwrap();

    assert!(model.forecast_period(&history, 0).unwrap().is_empty());
}

#[test]
fn test_first_period_step_matches_one_hour() {
    let history = synthetic_history(25, 5);
    let mut model = LinearForecaster::default();
    model.fit(&history).unwrap();

    let one = model.forecast_one_hour(&history).unwrap();
    let period = model.forecast_period(&history, 3).unwrap();
    assert_eq!(period[0], one);
}

#[test]
fn test_linear_trend_is_learned() {
    let history: Vec<KpiRow> = (0..30)
        .map(|i| KpiRow::new(start() + Duration::hours(i), 100 + 2 * i as u32, 40, 12, 0.3))
        .collect();
    let config = ForecastConfig::default().without_cyclic_features();
    let mut model = LinearForecaster::new(config).unwrap();
    model.fit(&history).unwrap();

    let next = model.forecast_one_hour(&history).unwrap();
    // Last value is 158, trend is +2 per step
    assert!((i64::from(next.sorting_capacity) - 160).abs() <= 1);
    assert_eq!(next.staff_available, 40);
    assert_eq!(next.vehicles_ready, 12);
}

#[test]
fn test_empty_history_with_fitted_model() {
    let mut model = LinearForecaster::default();
    model.fit(&synthetic_history(10, 9)).unwrap();

    let err = model.forecast_one_hour(&[]).unwrap_err();
    assert_eq!(
        err,
        ForecastError::InsufficientData {
            required: 1,
            actual: 0
        }
    );
}
