//! # monitor
//!
//! Ties the KPI modules together: loads history from a store, runs anomaly
//! detection, forecasting and the advisor, and composes the reports served
//! over HTTP and printed by the CLI.
//!
//! ## Example
//!
//! ```rust,no_run
//! use monitor::prelude::*;
//!
//! let store = CsvHistoryStore::new(StoreConfig::new("data/history.csv"));
//! let service = MonitorService::new(store);
//! let report = service.optimize(&AlertLedger::new()).unwrap();
//! println!("{:?}", report.status);
//! ```

mod error;
mod report;
mod service;

pub use error::{MonitorError, Result};
pub use report::OptimizationReport;
pub use service::{MonitorService, DEFAULT_HISTORY_LIMIT};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{MonitorError, Result};
    pub use crate::report::OptimizationReport;
    pub use crate::service::{MonitorService, DEFAULT_HISTORY_LIMIT};
    pub use anomaly_facade::{AnomalyRecord, AnomalyReport, AnomalyStatus, RollingZScoreConfig};
    pub use data_facade::{CsvHistoryStore, HistoryStore, KpiField, KpiRow, StoreConfig};
    pub use forecast_facade::ForecastConfig;
    pub use optimizer_facade::{
        AdvisorConfig, AlertLedger, AlertLevel, OptimizationStatus, UrgentAlert,
    };
}
