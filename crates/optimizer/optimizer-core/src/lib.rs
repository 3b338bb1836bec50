//! Optimizer Core
//!
//! **WARNING: This is an internal crate. Do not depend on it directly.**
//! **Use `optimizer-facade` instead for a stable public API.**
//!
//! Rule-based advisor and the in-memory ledger of dismissed alerts.

mod advisor;
mod ledger;

pub use advisor::{urgent_action, RuleAdvisor};
pub use ledger::AlertLedger;
