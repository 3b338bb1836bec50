//! KPI Data Core
//!
//! Implementations of the history store and the synthetic row generator.

mod clock;
mod generator;
mod store;

pub use clock::now_minute;
pub use generator::{DayPhase, SyntheticGenerator};
pub use store::CsvHistoryStore;
