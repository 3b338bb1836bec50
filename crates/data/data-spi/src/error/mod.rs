//! Error types for KPI data.
//!
//! This module contains error types and the Result alias.

mod data_error;

pub use data_error::{DataError, Result};
