//! Optimizer Service Provider Interface
//!
//! Defines the advisor contract that turns the latest KPI state, a one-step
//! forecast and detected anomalies into operational advice.

use std::collections::BTreeMap;

use anomaly_spi::AnomalyRecord;
use chrono::NaiveDateTime;
use data_spi::{KpiField, KpiRow};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Optimizer errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizerError {
    #[error("Unknown alert: {0}")]
    UnknownAlert(String),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, OptimizerError>;

// ============================================================================
// Alerts
// ============================================================================

/// Severity of an urgent alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Warning,
    Critical,
}

/// Alert raised for a KPI that is currently behaving abnormally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgentAlert {
    /// `<variable>@<YYYYMMDDHHMM>` of the latest anomaly for the variable.
    pub id: String,
    pub variable: KpiField,
    pub level: AlertLevel,
    pub title: String,
    pub detail: String,
    /// Timestamp of the latest anomaly for the variable.
    #[serde(with = "data_spi::model::timestamp")]
    pub detected_at: NaiveDateTime,
}

impl UrgentAlert {
    /// Build the stable id for an anomaly episode.
    pub fn make_id(variable: KpiField, detected_at: &NaiveDateTime) -> String {
        format!("{}@{}", variable.name(), detected_at.format("%Y%m%d%H%M"))
    }
}

// ============================================================================
// Advice
// ============================================================================

/// Overall outcome of an optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationStatus {
    Stable,
    ActionRequired,
}

/// Suggestions keyed by variable name, plus urgent alerts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub suggestions: BTreeMap<String, String>,
    pub urgent_alerts: Vec<UrgentAlert>,
}

impl Advice {
    /// `ActionRequired` when any suggestion or alert is present.
    pub fn status(&self) -> OptimizationStatus {
        if self.suggestions.is_empty() && self.urgent_alerts.is_empty() {
            OptimizationStatus::Stable
        } else {
            OptimizationStatus::ActionRequired
        }
    }

    /// Drop alerts rejected by `keep`.
    pub fn retain_alerts<F>(&mut self, keep: F)
    where
        F: FnMut(&UrgentAlert) -> bool,
    {
        self.urgent_alerts.retain(keep);
    }
}

// ============================================================================
// Core Traits
// ============================================================================

/// Rule engine producing advice from the current state.
///
/// Implementations must be pure functions of their inputs.
pub trait Advisor: Send + Sync {
    /// Compare `forecast` against `latest` and turn `anomalies` into alerts.
    ///
    /// When either row is absent no forecast suggestions are produced.
    fn advise(
        &self,
        latest: Option<&KpiRow>,
        forecast: Option<&KpiRow>,
        anomalies: &[AnomalyRecord],
    ) -> Advice;
}
