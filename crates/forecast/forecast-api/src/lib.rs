//! Forecast Consumer API
//!
//! Configuration types for the KPI forecaster.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use forecast_spi::{FitSummary, ForecastError, KpiForecaster, Result};

/// Configuration for the linear one-step forecaster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Minimum valid rows required to train (default: 5)
    pub min_rows: usize,
    /// Minutes between a forecast input and its prediction (default: 60)
    pub step_minutes: i64,
    /// Add sin/cos of the hour of day as features (default: true)
    pub cyclic_features: bool,
    /// Ridge penalty on standardized coefficients (default: 1e-3)
    pub ridge: f64,
    /// Horizon used when a caller does not name one (default: 24)
    pub default_horizon: usize,
    /// Longest horizon a caller may request (default: 168, one week)
    pub max_horizon: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            min_rows: 5,
            step_minutes: 60,
            cyclic_features: true,
            ridge: 1e-3,
            default_horizon: 24,
            max_horizon: 168,
        }
    }
}

impl ForecastConfig {
    /// Disable the hour-of-day features.
    pub fn without_cyclic_features(mut self) -> Self {
        self.cyclic_features = false;
        self
    }

    /// Set the ridge penalty.
    pub fn with_ridge(mut self, ridge: f64) -> Self {
        self.ridge = ridge;
        self
    }

    /// Set the longest allowed horizon.
    pub fn with_max_horizon(mut self, hours: usize) -> Self {
        self.max_horizon = hours;
        self
    }

    /// Reject horizons longer than `max_horizon`.
    pub fn check_horizon(&self, hours: usize) -> Result<()> {
        if hours > self.max_horizon {
            return Err(invalid(
                "hours",
                &format!("must be at most {}", self.max_horizon),
            ));
        }
        Ok(())
    }

    /// Check the parameters, returning the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.min_rows < 2 {
            return Err(invalid("min_rows", "must be at least 2"));
        }
        if !(1..=MINUTES_PER_DAY).contains(&self.step_minutes) {
            return Err(invalid("step_minutes", "must be between 1 and 1440"));
        }
        if self.default_horizon > self.max_horizon {
            return Err(invalid("default_horizon", "must not exceed max_horizon"));
        }
        if !self.ridge.is_finite() || self.ridge < 0.0 {
            return Err(invalid("ridge", "must be a non-negative number"));
        }
        Ok(())
    }
}

const MINUTES_PER_DAY: i64 = 24 * 60;

fn invalid(name: &str, reason: &str) -> ForecastError {
    ForecastError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
