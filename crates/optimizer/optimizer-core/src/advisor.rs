//! Threshold rules comparing the forecast against the latest row.

use std::collections::BTreeMap;

use anomaly_spi::AnomalyRecord;
use chrono::NaiveDateTime;
use data_spi::{KpiField, KpiRow};
use optimizer_api::AdvisorConfig;
use optimizer_spi::{Advice, Advisor, AlertLevel, OptimizerError, UrgentAlert};
use tracing::debug;

/// Canned corrective action for a KPI.
pub fn urgent_action(field: KpiField) -> &'static str {
    match field {
        KpiField::SortingCapacity => {
            "Increase sorting throughput by adjusting machine schedules or reallocating tasks."
        }
        KpiField::StaffAvailable => "Bring in backup staff or redistribute team workload.",
        KpiField::VehiclesReady => "Activate additional vehicles or streamline dispatch timing.",
        KpiField::CongestionLevel => {
            "Reroute parcels or expand sorting buffer capacity to reduce congestion."
        }
    }
}

/// Advisor driven by [`AdvisorConfig`] thresholds.
#[derive(Debug, Clone, Default)]
pub struct RuleAdvisor {
    config: AdvisorConfig,
}

impl RuleAdvisor {
    pub fn new(config: AdvisorConfig) -> Result<Self, OptimizerError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    fn suggest(&self, latest: &KpiRow, forecast: &KpiRow) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();

        for field in KpiField::ALL {
            let now = latest.get(field);
            let next = forecast.get(field);
            let message = match field {
                KpiField::CongestionLevel => (next > now + self.config.congestion_rise).then(|| {
                    format!(
                        "{} is expected to rise from {:.0}% to {:.0}%. {}",
                        field.label(),
                        now * 100.0,
                        next * 100.0,
                        urgent_action(field)
                    )
                }),
                _ => (next < now - self.drop_for(field)).then(|| {
                    format!(
                        "{} is expected to drop from {} to {}. {}",
                        field.label(),
                        now,
                        next,
                        urgent_action(field)
                    )
                }),
            };
            if let Some(message) = message {
                out.insert(field.name().to_string(), message);
            }
        }

        out
    }

    fn drop_for(&self, field: KpiField) -> f64 {
        match field {
            KpiField::SortingCapacity => self.config.sorting_capacity_drop,
            KpiField::StaffAvailable => self.config.staff_drop,
            KpiField::VehiclesReady => self.config.vehicles_drop,
            KpiField::CongestionLevel => self.config.congestion_rise,
        }
    }

    fn alerts(&self, anomalies: &[AnomalyRecord]) -> Vec<UrgentAlert> {
        // Latest timestamp and peak |z| per variable
        let mut episodes: BTreeMap<KpiField, (NaiveDateTime, f64)> = BTreeMap::new();
        for anomaly in anomalies {
            let z = anomaly.z_score.abs();
            episodes
                .entry(anomaly.variable)
                .and_modify(|(latest, peak)| {
                    *latest = (*latest).max(anomaly.timestamp());
                    *peak = peak.max(z);
                })
                .or_insert((anomaly.timestamp(), z));
        }

        let critical_z = self.config.critical_z();
        episodes
            .into_iter()
            .map(|(variable, (detected_at, peak))| {
                let level = if peak > critical_z {
                    AlertLevel::Critical
                } else {
                    AlertLevel::Warning
                };
                UrgentAlert {
                    id: UrgentAlert::make_id(variable, &detected_at),
                    variable,
                    level,
                    title: format!(
                        "URGENT: {} is behaving abnormally, immediate attention required.",
                        variable.label()
                    ),
                    detail: format!("{} Peak |z| = {:.2}.", urgent_action(variable), peak),
                    detected_at,
                }
            })
            .collect()
    }
}

impl Advisor for RuleAdvisor {
    fn advise(
        &self,
        latest: Option<&KpiRow>,
        forecast: Option<&KpiRow>,
        anomalies: &[AnomalyRecord],
    ) -> Advice {
        let suggestions = match (latest, forecast) {
            (Some(latest), Some(forecast)) => self.suggest(latest, forecast),
            _ => BTreeMap::new(),
        };
        let urgent_alerts = self.alerts(anomalies);

        debug!(
            suggestions = suggestions.len(),
            alerts = urgent_alerts.len(),
            "advice computed"
        );

        Advice {
            suggestions,
            urgent_alerts,
        }
    }
}
