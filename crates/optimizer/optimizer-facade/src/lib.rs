//! Optimizer Facade
//!
//! Unified re-exports for KPI advice:
//! - `Advisor` trait, `Advice` and `UrgentAlert` from SPI
//! - `AdvisorConfig` from API
//! - `RuleAdvisor`, `urgent_action` and `AlertLedger` from Core

pub use optimizer_spi::*;
pub use optimizer_api::*;
pub use optimizer_core::*;
