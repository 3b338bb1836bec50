//! Anomaly Detection Service Provider Interface
//!
//! Defines traits and types for detecting anomalies in KPI history.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::KpiAnomalyDetector;
pub use error::{AnomalyError, Result};
pub use model::{AnomalyRecord, AnomalyReport, AnomalyStatus};
