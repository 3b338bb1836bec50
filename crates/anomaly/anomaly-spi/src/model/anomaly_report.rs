//! Anomaly report returned to callers.

use std::collections::BTreeSet;

use data_spi::KpiField;
use serde::{Deserialize, Serialize};

use super::AnomalyRecord;

/// Whether any anomaly was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyStatus {
    NoAnomalies,
    Found,
}

/// Anomalies for a history, sorted by timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyReport {
    pub status: AnomalyStatus,
    pub anomalies: Vec<AnomalyRecord>,
}

impl AnomalyReport {
    /// Build a report; the status follows from whether `anomalies` is empty.
    pub fn new(anomalies: Vec<AnomalyRecord>) -> Self {
        let status = if anomalies.is_empty() {
            AnomalyStatus::NoAnomalies
        } else {
            AnomalyStatus::Found
        };
        Self { status, anomalies }
    }

    /// An empty report.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Distinct columns that triggered at least one record.
    pub fn variables(&self) -> BTreeSet<KpiField> {
        self.anomalies.iter().map(|a| a.variable).collect()
    }

    /// Count of records.
    pub fn anomaly_count(&self) -> usize {
        self.anomalies.len()
    }
}
