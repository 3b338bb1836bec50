//! Forecast Service Provider Interface
//!
//! Defines the forecaster contract for KPI history and the autoregressive
//! rollout policy shared by every implementation.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::KpiForecaster;
pub use error::{ForecastError, Result};
pub use model::FitSummary;
