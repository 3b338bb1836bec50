//! Forecast Core
//!
//! Linear one-step forecaster over the four KPIs, fitted by ridge-regularized
//! least squares on standardized features.

mod features;
mod linalg;
mod linear;

pub use features::{feature_vector, Standardizer, CYCLIC_FEATURES};
pub use linear::LinearForecaster;
