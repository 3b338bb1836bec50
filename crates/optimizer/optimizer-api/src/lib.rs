//! Optimizer API
//!
//! **WARNING: This is an internal crate. Do not depend on it directly.**
//! **Use `optimizer-facade` instead for a stable public API.**
//!
//! Configuration types for the rule-based advisor.

use optimizer_spi::{OptimizerError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Advisor Configuration
// ============================================================================

/// Thresholds for forecast-vs-latest suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Forecast sorting capacity below `latest - drop` triggers a suggestion.
    pub sorting_capacity_drop: f64,
    pub staff_drop: f64,
    pub vehicles_drop: f64,
    /// Forecast congestion above `latest + rise` triggers a suggestion.
    pub congestion_rise: f64,
    /// Share of the gap between the anomaly threshold and the largest |z|
    /// the rolling window can produce that a peak must clear to be critical.
    pub critical_fraction: f64,
    /// Threshold of the detector feeding the alerts.
    pub anomaly_threshold: f64,
    /// Window of the detector feeding the alerts.
    pub anomaly_window: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            sorting_capacity_drop: 10.0,
            staff_drop: 3.0,
            vehicles_drop: 2.0,
            congestion_rise: 0.1,
            critical_fraction: 0.5,
            anomaly_threshold: 2.5,
            anomaly_window: 10,
        }
    }
}

impl AdvisorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anomaly_threshold(mut self, threshold: f64) -> Self {
        self.anomaly_threshold = threshold;
        self
    }

    pub fn with_anomaly_window(mut self, window: usize) -> Self {
        self.anomaly_window = window;
        self
    }

    pub fn with_critical_fraction(mut self, fraction: f64) -> Self {
        self.critical_fraction = fraction;
        self
    }

    /// Check every threshold is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("sorting_capacity_drop", self.sorting_capacity_drop),
            ("staff_drop", self.staff_drop),
            ("vehicles_drop", self.vehicles_drop),
            ("congestion_rise", self.congestion_rise),
            ("critical_fraction", self.critical_fraction),
            ("anomaly_threshold", self.anomaly_threshold),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(OptimizerError::InvalidParameter {
                    name: name.to_string(),
                    reason: "must be a non-negative number".to_string(),
                });
            }
        }
        if self.critical_fraction > 1.0 {
            return Err(OptimizerError::InvalidParameter {
                name: "critical_fraction".to_string(),
                reason: "must be between 0 and 1".to_string(),
            });
        }
        if self.anomaly_window < 2 {
            return Err(OptimizerError::InvalidParameter {
                name: "anomaly_window".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        Ok(())
    }

    /// Largest |z| a window of `anomaly_window` points can produce when the
    /// window includes the scored point and uses the sample deviation.
    pub fn max_abs_z(&self) -> f64 {
        let w = self.anomaly_window as f64;
        (w - 1.0) / w.sqrt()
    }

    /// |z| above which an alert is critical. Never below the threshold.
    pub fn critical_z(&self) -> f64 {
        let t = self.anomaly_threshold;
        t + self.critical_fraction * (self.max_abs_z() - t).max(0.0)
    }
}
