//! KPI Data API
//!
//! Configuration types and builders for the history store and the
//! synthetic generator.

mod config;

pub use config::{GeneratorConfig, StoreConfig, StoreConfigBuilder, DEFAULT_HISTORY_PATH};

// Re-export SPI types
pub use data_spi::{DataError, KpiField, KpiRow, Result};
