//! CSV-backed history store.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Duration, NaiveDateTime};
use data_api::StoreConfig;
use data_spi::{DataError, HistoryStore, KpiRow, Result, RowGenerator, COLUMNS};
use tracing::{debug, info, warn};

use crate::clock::now_minute;
use crate::generator::SyntheticGenerator;

/// What was found on disk.
#[derive(Debug)]
enum Snapshot {
    Missing,
    Empty,
    Corrupt(String),
    Rows(Vec<KpiRow>),
}

/// History store persisted as a single CSV file.
///
/// The file is rewritten in full on every append, through a temporary file
/// renamed over the old one, so readers see either the old or the new
/// history. There is no locking: two racing appends may lose one row.
#[derive(Debug, Clone)]
pub struct CsvHistoryStore<G: RowGenerator = SyntheticGenerator> {
    config: StoreConfig,
    generator: G,
    clock: fn() -> NaiveDateTime,
}

impl CsvHistoryStore<SyntheticGenerator> {
    /// Create a store using the default synthetic generator.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_generator(config, SyntheticGenerator::default())
    }
}

impl<G: RowGenerator> CsvHistoryStore<G> {
    /// Create a store with a custom row generator.
    pub fn with_generator(config: StoreConfig, generator: G) -> Self {
        Self {
            config,
            generator,
            clock: now_minute,
        }
    }

    /// Replace the wall clock used when the store is empty or bootstrapped.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Get the configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn step(&self) -> Duration {
        Duration::minutes(self.config.step_minutes)
    }

    fn read(&self) -> Result<Snapshot> {
        let path = self.path();
        if !path.exists() {
            return Ok(Snapshot::Missing);
        }
        if fs::metadata(path)?.len() == 0 {
            return Ok(Snapshot::Empty);
        }

        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));

        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(e) => return Ok(Snapshot::Corrupt(e.to_string())),
        };
        let found: Vec<&str> = headers.iter().map(str::trim).collect();
        if found != COLUMNS {
            let mismatch = DataError::Schema {
                expected: COLUMNS.join(","),
                found: found.join(","),
            };
            return Ok(Snapshot::Corrupt(mismatch.to_string()));
        }

        let mut rows = Vec::new();
        let mut dropped = 0usize;
        for record in reader.deserialize::<KpiRow>() {
            match record {
                Ok(mut row) => {
                    row.congestion_level = row.congestion_level.clamp(0.0, 1.0);
                    if row.is_valid() {
                        rows.push(row);
                    } else {
                        dropped += 1;
                    }
                }
                Err(_) => dropped += 1,
            }
        }
        if dropped > 0 {
            debug!(dropped, path = %path.display(), "dropped unparseable history rows");
        }

        rows.sort_by_key(|row| row.timestamp);
        Ok(Snapshot::Rows(rows))
    }

    fn write(&self, rows: &[KpiRow]) -> Result<()> {
        if let Some(parent) = self.path().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.tmp_path();
        let written = write_rows(&tmp_path, rows).and_then(|()| {
            fs::rename(&tmp_path, self.path())?;
            Ok(())
        });
        if written.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        written
    }

    /// Sibling of the history file, unique per write.
    fn tmp_path(&self) -> PathBuf {
        static SEQ: AtomicU64 = AtomicU64::new(0);
        let seq = SEQ.fetch_add(1, Ordering::Relaxed);
        let mut name = self
            .path()
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.{}.tmp", std::process::id(), seq));
        self.path().with_file_name(name)
    }

    fn regenerate(&self) -> Result<Vec<KpiRow>> {
        let rows = self.generator.bootstrap(
            self.config.bootstrap_rows,
            (self.clock)(),
            self.config.step_minutes,
        );
        self.write(&rows)?;
        info!(
            rows = rows.len(),
            path = %self.path().display(),
            "created fresh history"
        );
        Ok(rows)
    }
}

fn write_rows(path: &Path, rows: &[KpiRow]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(&file);
    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    drop(writer);
    file.sync_all()?;
    Ok(())
}

impl<G: RowGenerator> HistoryStore for CsvHistoryStore<G> {
    fn init(&self) -> Result<()> {
        match self.read()? {
            Snapshot::Rows(rows) if !rows.is_empty() => Ok(()),
            Snapshot::Corrupt(reason) => {
                warn!(%reason, "history file is malformed, regenerating");
                self.regenerate().map(|_| ())
            }
            _ => self.regenerate().map(|_| ()),
        }
    }

    fn load(&self) -> Result<Vec<KpiRow>> {
        match self.read()? {
            Snapshot::Rows(rows) => Ok(rows),
            Snapshot::Missing | Snapshot::Empty => self.regenerate(),
            Snapshot::Corrupt(reason) => {
                warn!(%reason, "history file is malformed, regenerating");
                self.regenerate()
            }
        }
    }

    fn append(&self) -> Result<KpiRow> {
        let mut rows = self.load()?;

        let timestamp = match rows.last() {
            Some(last) => last.timestamp + self.step(),
            None => (self.clock)(),
        };
        let row = self.generator.generate(timestamp);

        rows.push(row.clone());
        self.write(&rows)?;
        Ok(row)
    }
}
