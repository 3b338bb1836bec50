//! Data models for KPI history.
//!
//! This module contains the row type persisted by the history store and the
//! helpers shared by every analysis module.

mod kpi_field;
mod kpi_row;
pub mod timestamp;

pub use kpi_field::KpiField;
pub use kpi_row::{tail, KpiRow, COLUMNS};
pub use timestamp::{format_timestamp, parse_timestamp, TIMESTAMP_FORMAT};
