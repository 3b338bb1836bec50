//! KPI Data Service Provider Interface
//!
//! Defines the KPI row model and the contracts for persisting and
//! generating operational history.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{HistoryStore, RowGenerator};
pub use error::{DataError, Result};
pub use model::{
    format_timestamp, parse_timestamp, tail, KpiField, KpiRow, COLUMNS, TIMESTAMP_FORMAT,
};
