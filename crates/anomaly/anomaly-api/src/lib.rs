//! Anomaly Detection API
//!
//! Configuration types for anomaly detection.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{AnomalyError, AnomalyRecord, AnomalyReport, AnomalyStatus, Result};

// ============================================================================
// Detector Configuration
// ============================================================================

/// Rolling z-score detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingZScoreConfig {
    /// Points in the trailing window, current point included (default: 10).
    pub window: usize,
    /// Absolute z-score above which a point is anomalous (default: 2.5).
    pub threshold: f64,
}

impl Default for RollingZScoreConfig {
    fn default() -> Self {
        Self {
            window: 10,
            threshold: 2.5,
        }
    }
}

impl RollingZScoreConfig {
    pub fn new(window: usize, threshold: f64) -> Self {
        Self { window, threshold }
    }

    /// Check the parameters, returning the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.window < 2 {
            return Err(AnomalyError::InvalidParameter {
                name: "window".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(AnomalyError::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must be a positive number".to_string(),
            });
        }
        Ok(())
    }
}
