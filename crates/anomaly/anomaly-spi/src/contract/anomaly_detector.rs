//! Anomaly detector trait definition.

use data_spi::KpiRow;

use crate::error::Result;
use crate::model::AnomalyRecord;

/// Anomaly detector over KPI history.
///
/// Implementations score every KPI column independently and return the
/// union of flagged rows, sorted by timestamp.
pub trait KpiAnomalyDetector: Send + Sync {
    /// Detect anomalies across all KPI columns.
    fn compute(&self, history: &[KpiRow]) -> Result<Vec<AnomalyRecord>>;

    /// Per-point scores for a single series. `None` marks points where the
    /// score is undefined.
    fn score_series(&self, values: &[f64]) -> Vec<Option<f64>>;
}
