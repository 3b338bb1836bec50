//! Anomaly detector implementations.

use anomaly_api::RollingZScoreConfig;
use anomaly_spi::{AnomalyRecord, KpiAnomalyDetector, Result};
use data_spi::{KpiField, KpiRow};
use tracing::debug;

use crate::rolling::rolling_zscores;

// ============================================================================
// Rolling Z-Score Detector
// ============================================================================

/// Rolling z-score anomaly detector.
///
/// Each KPI column is scored against the mean and sample standard deviation
/// of its own trailing window. A point is anomalous when `|z| > threshold`.
/// Points inside the warm-up window, and points whose window has zero
/// spread, are never flagged.
#[derive(Debug, Clone)]
pub struct RollingZScoreDetector {
    config: RollingZScoreConfig,
}

impl RollingZScoreDetector {
    /// Create a detector, rejecting invalid window or threshold values.
    pub fn new(window: usize, threshold: f64) -> Result<Self> {
        Self::from_config(RollingZScoreConfig::new(window, threshold))
    }

    /// Create from configuration.
    pub fn from_config(config: RollingZScoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the window size.
    pub fn window(&self) -> usize {
        self.config.window
    }

    /// Get the threshold.
    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    fn detect_column(&self, history: &[KpiRow], field: KpiField) -> Vec<AnomalyRecord> {
        let values: Vec<f64> = history.iter().map(|row| row.get(field)).collect();

        self.score_series(&values)
            .into_iter()
            .zip(history)
            .filter_map(|(z, row)| {
                let z = z?;
                (z.abs() > self.config.threshold)
                    .then(|| AnomalyRecord::new(row.clone(), field, z))
            })
            .collect()
    }
}

impl Default for RollingZScoreDetector {
    fn default() -> Self {
        Self {
            config: RollingZScoreConfig::default(),
        }
    }
}

impl KpiAnomalyDetector for RollingZScoreDetector {
    fn compute(&self, history: &[KpiRow]) -> Result<Vec<AnomalyRecord>> {
        let mut anomalies: Vec<AnomalyRecord> = KpiField::ALL
            .into_iter()
            .flat_map(|field| self.detect_column(history, field))
            .collect();

        // Stable: rows sharing a timestamp keep column order.
        anomalies.sort_by_key(|a| a.timestamp());

        debug!(
            rows = history.len(),
            anomalies = anomalies.len(),
            window = self.config.window,
            threshold = self.config.threshold,
            "rolling z-score pass"
        );
        Ok(anomalies)
    }

    fn score_series(&self, values: &[f64]) -> Vec<Option<f64>> {
        rolling_zscores(values, self.config.window)
    }
}
