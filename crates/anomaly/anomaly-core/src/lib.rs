//! Anomaly Detection Core
//!
//! Rolling statistics and the rolling z-score detector.

mod detectors;
mod rolling;

pub use detectors::*;
pub use rolling::{rolling_mean_std, rolling_zscores};
