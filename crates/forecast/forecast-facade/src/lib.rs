//! Forecast Facade
//!
//! Unified re-exports for KPI forecasting:
//! - `KpiForecaster` trait, `FitSummary` and `ForecastError` from SPI
//! - `ForecastConfig` from API
//! - `LinearForecaster` and feature helpers from Core

// Re-export everything from SPI
pub use forecast_spi::*;

// Re-export everything from API
pub use forecast_api::*;

// Re-export everything from Core
pub use forecast_core::*;
