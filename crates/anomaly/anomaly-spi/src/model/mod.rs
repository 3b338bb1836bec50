//! Data models for anomaly detection.
//!
//! This module contains data structures used throughout the anomaly detection system.

mod anomaly_record;
mod anomaly_report;

pub use anomaly_record::AnomalyRecord;
pub use anomaly_report::{AnomalyReport, AnomalyStatus};
