//! Forecast models

mod fit_summary;

pub use fit_summary::FitSummary;
