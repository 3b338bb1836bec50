//! Dismissed alert bookkeeping.

use std::collections::HashSet;

use optimizer_spi::UrgentAlert;
use tracing::info;

/// Ids of alerts an operator has dismissed. Lives for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct AlertLedger {
    dismissed: HashSet<String>,
}

impl AlertLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` dismissed. Returns `true` if it was not dismissed before.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let inserted = self.dismissed.insert(id.to_string());
        if inserted {
            info!(alert_id = id, "alert dismissed");
        }
        inserted
    }

    pub fn is_dismissed(&self, id: &str) -> bool {
        self.dismissed.contains(id)
    }

    /// Alerts that have not been dismissed, in input order.
    pub fn filter_active(&self, alerts: Vec<UrgentAlert>) -> Vec<UrgentAlert> {
        alerts
            .into_iter()
            .filter(|alert| !self.is_dismissed(&alert.id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.dismissed.clear();
    }

    pub fn len(&self) -> usize {
        self.dismissed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dismissed.is_empty()
    }
}
