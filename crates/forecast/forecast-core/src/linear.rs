//! Linear one-step KPI forecaster.

use chrono::Duration;
use data_spi::{KpiField, KpiRow};
use forecast_api::ForecastConfig;
use forecast_spi::{FitSummary, ForecastError, KpiForecaster, Result};
use tracing::debug;

use crate::features::{feature_vector, Standardizer};
use crate::linalg::solve;

const TARGETS: usize = 4;

#[derive(Debug, Clone)]
struct FittedModel {
    scaler: Standardizer,
    /// `(1 + features) x TARGETS`, row-major, intercept first
    coefficients: Vec<f64>,
    summary: FitSummary,
}

impl FittedModel {
    fn predict_raw(&self, features: &[f64]) -> [f64; TARGETS] {
        let mut z = Vec::with_capacity(features.len() + 1);
        z.push(1.0);
        z.extend(self.scaler.transform(features));

        let mut out = [0.0; TARGETS];
        for (j, value) in out.iter_mut().enumerate() {
            *value = z
                .iter()
                .enumerate()
                .map(|(i, zi)| zi * self.coefficients[i * TARGETS + j])
                .sum();
        }
        out
    }
}

/// Predicts each KPI at `t + 1` as a linear function of all KPIs at `t`.
///
/// Features are standardized before fitting and the ridge penalty applies to
/// every coefficient except the intercept.
#[derive(Debug, Clone)]
pub struct LinearForecaster {
    config: ForecastConfig,
    model: Option<FittedModel>,
}

impl LinearForecaster {
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            model: None,
        })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Statistics of the last successful fit.
    pub fn summary(&self) -> Option<&FitSummary> {
        self.model.as_ref().map(|m| &m.summary)
    }

    fn to_row(&self, input: &KpiRow, predicted: [f64; TARGETS]) -> Result<KpiRow> {
        let current = input.values();
        let mut values = [0.0; TARGETS];
        for (j, field) in KpiField::ALL.iter().enumerate() {
            let raw = if predicted[j].is_finite() {
                predicted[j]
            } else {
                current[j]
            };
            values[j] = if field.is_count() {
                raw.round().max(0.0)
            } else {
                raw
            };
        }

        let timestamp = input
            .timestamp
            .checked_add_signed(Duration::minutes(self.config.step_minutes))
            .ok_or_else(|| ForecastError::InvalidParameter {
                name: "hours".to_string(),
                reason: format!("forecast past {} is out of range", input.timestamp),
            })?;

        Ok(KpiRow::new(
            timestamp,
            values[0] as u32,
            values[1] as u32,
            values[2] as u32,
            values[3],
        ))
    }
}

impl Default for LinearForecaster {
    fn default() -> Self {
        Self {
            config: ForecastConfig::default(),
            model: None,
        }
    }
}

impl KpiForecaster for LinearForecaster {
    fn fit(&mut self, history: &[KpiRow]) -> Result<()> {
        self.model = None;

        let rows: Vec<&KpiRow> = history.iter().filter(|r| r.is_valid()).collect();
        if rows.len() < self.config.min_rows {
            return Err(ForecastError::InsufficientData {
                required: self.config.min_rows,
                actual: rows.len(),
            });
        }

        let cyclic = self.config.cyclic_features;
        let inputs: Vec<Vec<f64>> = rows[..rows.len() - 1]
            .iter()
            .map(|r| feature_vector(r, cyclic))
            .collect();
        let targets: Vec<[f64; TARGETS]> = rows[1..].iter().map(|r| r.values()).collect();

        let scaler = Standardizer::fit(&inputs);
        let p = scaler.width() + 1;
        let pairs = inputs.len();

        let design: Vec<Vec<f64>> = inputs
            .iter()
            .map(|x| {
                let mut z = Vec::with_capacity(p);
                z.push(1.0);
                z.extend(scaler.transform(x));
                z
            })
            .collect();

        // Normal equations: (Z'Z + ridge * D) B = Z'Y, D excludes the intercept
        let mut gram = vec![0.0; p * p];
        let mut rhs = vec![0.0; p * TARGETS];
        for (z, y) in design.iter().zip(&targets) {
            for i in 0..p {
                for k in 0..p {
                    gram[i * p + k] += z[i] * z[k];
                }
                for j in 0..TARGETS {
                    rhs[i * TARGETS + j] += z[i] * y[j];
                }
            }
        }
        for i in 1..p {
            gram[i * p + i] += self.config.ridge;
        }

        let coefficients = solve(&gram, &rhs, p, TARGETS)?;

        let mut model = FittedModel {
            scaler,
            coefficients,
            summary: FitSummary {
                rows: rows.len(),
                pairs,
                features: p - 1,
                rmse: [0.0; TARGETS],
            },
        };

        let mut sse = [0.0; TARGETS];
        for (x, y) in inputs.iter().zip(&targets) {
            let pred = model.predict_raw(x);
            for j in 0..TARGETS {
                sse[j] += (pred[j] - y[j]).powi(2);
            }
        }
        model.summary.rmse = sse.map(|s| (s / pairs as f64).sqrt());

        debug!(
            rows = model.summary.rows,
            pairs,
            features = model.summary.features,
            rmse = ?model.summary.rmse,
            "fitted linear forecaster"
        );

        self.model = Some(model);
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    fn max_horizon(&self) -> usize {
        self.config.max_horizon
    }

    fn predict_next(&self, row: &KpiRow) -> Result<KpiRow> {
        let model = self.model.as_ref().ok_or(ForecastError::NotFitted)?;
        let features = feature_vector(row, self.config.cyclic_features);
        let predicted = model.predict_raw(&features);
        self.to_row(row, predicted)
    }
}
