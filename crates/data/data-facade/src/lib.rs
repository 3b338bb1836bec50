//! KPI Data Facade
//!
//! Unified re-exports for the data module.
//!
//! This facade provides a single entry point for all history functionality:
//! - `data_spi` - Row model, `HistoryStore` and `RowGenerator` contracts, errors
//! - `data_api` - Store and generator configuration
//! - `data_core` - `CsvHistoryStore` and `SyntheticGenerator`
//!
//! # Example
//!
//! ```rust,ignore
//! use data_facade::{CsvHistoryStore, HistoryStore, StoreConfig};
//!
//! let store = CsvHistoryStore::new(StoreConfig::new("data/history.csv"));
//! store.init()?;
//! let row = store.append()?;
//! println!("appended {:?}", row);
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;
