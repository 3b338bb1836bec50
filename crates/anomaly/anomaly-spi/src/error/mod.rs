//! Errors raised while configuring or running KPI anomaly detection.

mod anomaly_error;

pub use anomaly_error::{AnomalyError, Result};
