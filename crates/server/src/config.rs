//! Server configuration from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use data_facade::{StoreConfig, DEFAULT_HISTORY_PATH};
use thiserror::Error;

/// Invalid environment value.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime settings for the HTTP server and scheduler.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// CSV history file
    pub history_path: PathBuf,
    /// Period between scheduled appends
    pub generate_interval: Duration,
    /// Rows generated when the store is (re)created
    pub bootstrap_rows: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            generate_interval: Duration::from_secs(5),
            bootstrap_rows: 20,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `HISTORY_PATH`, `GENERATE_INTERVAL_SECS` and
    /// `BOOTSTRAP_ROWS`, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let interval_secs: u64 = parse(&lookup, "GENERATE_INTERVAL_SECS", "positive integer")?
            .unwrap_or(defaults.generate_interval.as_secs());
        if interval_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "GENERATE_INTERVAL_SECS",
                expected: "positive integer",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse(&lookup, "PORT", "port number")?.unwrap_or(defaults.port),
            history_path: lookup("HISTORY_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.history_path),
            generate_interval: Duration::from_secs(interval_secs),
            bootstrap_rows: parse(&lookup, "BOOTSTRAP_ROWS", "row count")?
                .unwrap_or(defaults.bootstrap_rows),
        })
    }

    /// Socket address to bind.
    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            name: "HOST",
            expected: "host:port address",
            value: raw,
        })
    }

    /// Store settings derived from this configuration.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::builder()
            .path(self.history_path.clone())
            .bootstrap_rows(self.bootstrap_rows)
            .build()
    }
}

fn parse<F, T>(lookup: &F, name: &'static str, expected: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                name,
                expected,
                value,
            }),
    }
}
