//! Feature extraction and standardization.

use std::f64::consts::PI;

use chrono::Timelike;
use data_spi::KpiRow;

/// Hour-of-day features appended when cyclic features are enabled.
pub const CYCLIC_FEATURES: usize = 2;

/// Raw feature vector for a row: the four KPIs, then sin/cos of the hour.
pub fn feature_vector(row: &KpiRow, cyclic: bool) -> Vec<f64> {
    let mut features = row.values().to_vec();
    if cyclic {
        let angle = 2.0 * PI * f64::from(row.timestamp.hour()) / 24.0;
        features.push(angle.sin());
        features.push(angle.cos());
    }
    features
}

/// Per-column zero mean, unit variance scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardizer {
    means: Vec<f64>,
    std_devs: Vec<f64>,
}

impl Standardizer {
    /// Fit column statistics over `rows`, each of equal width.
    pub fn fit(rows: &[Vec<f64>]) -> Self {
        let width = rows.first().map_or(0, Vec::len);
        let n = rows.len().max(1) as f64;

        let means: Vec<f64> = (0..width)
            .map(|j| rows.iter().map(|r| r[j]).sum::<f64>() / n)
            .collect();
        let std_devs = (0..width)
            .map(|j| {
                let var = rows.iter().map(|r| (r[j] - means[j]).powi(2)).sum::<f64>() / n;
                var.sqrt()
            })
            .collect();

        Self { means, std_devs }
    }

    pub fn width(&self) -> usize {
        self.means.len()
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn std_devs(&self) -> &[f64] {
        &self.std_devs
    }

    /// Scale one feature vector. Constant columns map to zero.
    pub fn transform(&self, features: &[f64]) -> Vec<f64> {
        features
            .iter()
            .zip(self.means.iter().zip(&self.std_devs))
            .map(|(&x, (&mean, &std))| if std == 0.0 { 0.0 } else { (x - mean) / std })
            .collect()
    }
}
