//! Contract definitions for KPI history.
//!
//! This module contains trait definitions that providers must implement.

mod history_store;
mod row_generator;

pub use history_store::HistoryStore;
pub use row_generator::RowGenerator;
