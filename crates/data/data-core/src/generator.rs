//! Synthetic KPI generator with time-of-day patterns.

use chrono::{NaiveDateTime, Timelike};
use data_api::GeneratorConfig;
use data_spi::{KpiRow, RowGenerator};
use rand::Rng;

/// Congestion never drops below this during the morning surge.
const MORNING_CONGESTION_FLOOR: f64 = 0.05;

// ============================================================================
// Day Phases
// ============================================================================

/// Operational phase of the day, derived from the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    /// 08:00-11:59
    MorningSurge,
    /// 12:00-14:59
    LunchSlowdown,
    /// 15:00-18:59
    AfternoonCongestion,
    /// 19:00-22:59
    EveningRecovery,
    /// 23:00-07:59
    NightLow,
}

impl DayPhase {
    /// Phase for an hour of the day (0-23).
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            8..=11 => DayPhase::MorningSurge,
            12..=14 => DayPhase::LunchSlowdown,
            15..=18 => DayPhase::AfternoonCongestion,
            19..=22 => DayPhase::EveningRecovery,
            _ => DayPhase::NightLow,
        }
    }
}

/// Intermediate values before safety bounds are applied.
#[derive(Debug, Clone, Copy)]
struct Draft {
    sorting: i64,
    staff: i64,
    vehicles: i64,
    congestion: f64,
}

impl Draft {
    fn apply<R: Rng + ?Sized>(mut self, phase: DayPhase, rng: &mut R) -> Self {
        match phase {
            DayPhase::MorningSurge => {
                self.sorting += rng.gen_range(10..=25_i64);
                self.staff += rng.gen_range(2..=5_i64);
                self.congestion = (self.congestion - 0.1).max(MORNING_CONGESTION_FLOOR);
            }
            DayPhase::LunchSlowdown => {
                self.sorting -= rng.gen_range(5..=15_i64);
                self.staff -= rng.gen_range(3..=6_i64);
                self.congestion += 0.1;
            }
            DayPhase::AfternoonCongestion => {
                self.congestion += rng.gen_range(0.15..=0.3_f64);
                self.vehicles -= rng.gen_range(1..=3_i64);
            }
            DayPhase::EveningRecovery => {
                self.sorting += rng.gen_range(5..=15_i64);
                self.congestion -= rng.gen_range(0.05..=0.1_f64);
            }
            DayPhase::NightLow => {
                self.sorting -= rng.gen_range(5..=12_i64);
                self.staff -= rng.gen_range(2..=4_i64);
                self.congestion -= 0.05;
            }
        }
        self
    }
}

// ============================================================================
// Synthetic Generator
// ============================================================================

/// Random KPI generator following daily operational patterns.
///
/// A uniform base value is drawn per field, shifted by the adjustment for the
/// hour's [`DayPhase`], then clamped to the configured safety floors.
#[derive(Debug, Clone, Default)]
pub struct SyntheticGenerator {
    config: GeneratorConfig,
}

impl SyntheticGenerator {
    /// Create a generator with the given ranges and floors.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a row using the supplied random source.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R, timestamp: NaiveDateTime) -> KpiRow {
        let c = &self.config;
        let base = Draft {
            sorting: draw_count(rng, c.sorting_capacity),
            staff: draw_count(rng, c.staff_available),
            vehicles: draw_count(rng, c.vehicles_ready),
            congestion: draw_fraction(rng, c.congestion_level),
        };

        let adjusted = base.apply(DayPhase::from_hour(timestamp.hour()), rng);

        KpiRow::new(
            timestamp,
            floor_count(adjusted.sorting, c.min_sorting_capacity),
            floor_count(adjusted.staff, c.min_staff_available),
            floor_count(adjusted.vehicles, c.min_vehicles_ready),
            adjusted.congestion.clamp(0.0, 1.0),
        )
    }
}

impl RowGenerator for SyntheticGenerator {
    fn generate(&self, timestamp: NaiveDateTime) -> KpiRow {
        self.generate_with(&mut rand::thread_rng(), timestamp)
    }
}

fn draw_count<R: Rng + ?Sized>(rng: &mut R, (a, b): (u32, u32)) -> i64 {
    i64::from(rng.gen_range(a.min(b)..=a.max(b)))
}

fn draw_fraction<R: Rng + ?Sized>(rng: &mut R, (a, b): (f64, f64)) -> f64 {
    rng.gen_range(a.min(b)..=a.max(b))
}

fn floor_count(value: i64, floor: u32) -> u32 {
    u32::try_from(value.max(i64::from(floor))).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at_hour(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(DayPhase::from_hour(7), DayPhase::NightLow);
        assert_eq!(DayPhase::from_hour(8), DayPhase::MorningSurge);
        assert_eq!(DayPhase::from_hour(11), DayPhase::MorningSurge);
        assert_eq!(DayPhase::from_hour(12), DayPhase::LunchSlowdown);
        assert_eq!(DayPhase::from_hour(14), DayPhase::LunchSlowdown);
        assert_eq!(DayPhase::from_hour(15), DayPhase::AfternoonCongestion);
        assert_eq!(DayPhase::from_hour(18), DayPhase::AfternoonCongestion);
        assert_eq!(DayPhase::from_hour(19), DayPhase::EveningRecovery);
        assert_eq!(DayPhase::from_hour(22), DayPhase::EveningRecovery);
        assert_eq!(DayPhase::from_hour(23), DayPhase::NightLow);
        assert_eq!(DayPhase::from_hour(0), DayPhase::NightLow);
    }

    #[test]
    fn test_bounds_hold_for_every_hour() {
        let generator = SyntheticGenerator::default();
        let mut rng = StdRng::seed_from_u64(7);

        for hour in 0..24 {
            for _ in 0..50 {
                let row = generator.generate_with(&mut rng, at_hour(hour));
                assert!(row.sorting_capacity >= 10);
                assert!(row.staff_available >= 3);
                assert!(row.vehicles_ready >= 2);
                assert!((0.0..=1.0).contains(&row.congestion_level));
                assert_eq!(row.timestamp, at_hour(hour));
            }
        }
    }

    #[test]
    fn test_morning_surge_ranges() {
        let generator = SyntheticGenerator::default();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let row = generator.generate_with(&mut rng, at_hour(9));
            assert!((70..=125).contains(&row.sorting_capacity));
            assert!((32..=65).contains(&row.staff_available));
            assert!(row.congestion_level >= MORNING_CONGESTION_FLOOR);
        }
    }

    #[test]
    fn test_afternoon_congestion_reduces_vehicles() {
        let generator = SyntheticGenerator::default();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let row = generator.generate_with(&mut rng, at_hour(16));
            assert!(row.vehicles_ready <= 19);
            assert!(row.congestion_level >= 0.25 - 1e-9);
        }
    }

    #[test]
    fn test_floors_apply_to_tight_config() {
        let config = GeneratorConfig {
            sorting_capacity: (0, 0),
            staff_available: (0, 0),
            vehicles_ready: (0, 0),
            congestion_level: (0.0, 0.0),
            ..GeneratorConfig::default()
        };
        let generator = SyntheticGenerator::new(config);
        let mut rng = StdRng::seed_from_u64(1);

        let row = generator.generate_with(&mut rng, at_hour(2));
        assert_eq!(row.sorting_capacity, 10);
        assert_eq!(row.staff_available, 3);
        assert_eq!(row.vehicles_ready, 2);
        assert_eq!(row.congestion_level, 0.0);
    }

    #[test]
    fn test_bootstrap_spacing() {
        let generator = SyntheticGenerator::default();
        let end = at_hour(12);
        let rows = generator.bootstrap(4, end, 30);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].timestamp, end - chrono::Duration::minutes(120));
        assert_eq!(rows[3].timestamp, end - chrono::Duration::minutes(30));
        for pair in rows.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, chrono::Duration::minutes(30));
        }
    }
}
