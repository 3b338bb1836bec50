//! Contract definitions for KPI forecasting.

mod kpi_forecaster;

pub use kpi_forecaster::KpiForecaster;
