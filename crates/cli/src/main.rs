//! # logiops
//!
//! Command-line interface for the logistics KPI monitor.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use data_facade::{CsvHistoryStore, StoreConfig, DEFAULT_HISTORY_PATH};
use logiops_server::{init_tracing, ServerConfig};
use monitor::prelude::*;
use serde::Serialize;
use serde_json::json;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "logiops")]
#[command(about = "Logistics KPI monitor CLI", long_about = None)]
struct Cli {
    /// History CSV file
    #[arg(long, global = true, default_value = DEFAULT_HISTORY_PATH)]
    store: PathBuf,

    /// Output file (optional, defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the history file if it is missing or malformed
    Init,

    /// Generate and append rows
    Append {
        /// Number of rows to append
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Print the newest rows
    History {
        /// Maximum number of rows
        #[arg(short, long, default_value = "500")]
        limit: usize,
    },

    /// Detect rolling z-score anomalies
    Detect {
        /// Absolute z-score threshold
        #[arg(short, long, default_value = "2.5")]
        threshold: f64,

        /// Rolling window size, current point included
        #[arg(short, long, default_value = "10")]
        window: usize,
    },

    /// Forecast the next hours autoregressively
    Forecast {
        /// Number of hourly steps
        #[arg(long, default_value = "24")]
        hours: usize,
    },

    /// Forecast one hour past the last row
    ForecastNext,

    /// Compare forecast with the latest state and list urgent alerts
    Optimize,

    /// Start the REST API server with the row scheduler
    Serve {
        /// Host to bind to (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Seconds between generated rows (overrides GENERATE_INTERVAL_SECS)
        #[arg(long)]
        interval_secs: Option<u64>,
    },
}

fn open_service(store: &Path) -> MonitorService {
    MonitorService::new(CsvHistoryStore::new(StoreConfig::new(store)))
}

/// Serialize `value` as pretty JSON to `output` or stdout.
fn write_json<T: Serialize>(value: &T, output: Option<&PathBuf>) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize output: {}", e))?;

    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        writeln!(file, "{}", text).map_err(|e| format!("Failed to write output: {}", e))?;
        println!("Results written to {:?}", path);
    } else {
        println!("{}", text);
    }
    Ok(())
}

/// Print `{error}` for insufficient data, fail on anything else.
fn write_result<T: Serialize>(
    result: monitor::Result<T>,
    output: Option<&PathBuf>,
) -> CliResult<()> {
    match result {
        Ok(value) => write_json(&value, output),
        Err(err) if err.is_insufficient_data() => {
            write_json(&json!({ "error": err.to_string() }), output)
        }
        Err(err) => Err(err.to_string()),
    }
}

fn run_init(store: &Path, output: Option<&PathBuf>) -> CliResult<()> {
    let service = open_service(store);
    service.init().map_err(|e| e.to_string())?;
    let rows = service.row_count().map_err(|e| e.to_string())?;
    write_json(&json!({ "path": store, "rows": rows }), output)
}

fn run_append(store: &Path, count: usize, output: Option<&PathBuf>) -> CliResult<()> {
    let service = open_service(store);
    let rows = (0..count)
        .map(|_| service.append())
        .collect::<monitor::Result<Vec<KpiRow>>>()
        .map_err(|e| e.to_string())?;
    write_json(&rows, output)
}

fn run_serve(
    store: PathBuf,
    host: Option<String>,
    port: Option<u16>,
    interval_secs: Option<u64>,
) -> CliResult<()> {
    dotenvy::dotenv().ok();
    init_tracing("logiops_server=info,data_core=info,tower_http=info");

    let mut config = ServerConfig::from_env().map_err(|e| e.to_string())?;
    config.history_path = store;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(secs) = interval_secs {
        if secs == 0 {
            return Err("--interval-secs must be positive".to_string());
        }
        config.generate_interval = Duration::from_secs(secs);
    }

    let runtime =
        tokio::runtime::Runtime::new().map_err(|e| format!("Failed to start runtime: {}", e))?;
    runtime
        .block_on(logiops_server::run(config))
        .map_err(|e| e.to_string())
}

fn run(cli: Cli) -> CliResult<()> {
    let output = cli.output.as_ref();
    let store = cli.store.as_path();

    match cli.command {
        Commands::Init => run_init(store, output),

        Commands::Append { count } => run_append(store, count, output),

        Commands::History { limit } => write_result(open_service(store).history(limit), output),

        Commands::Detect { threshold, window } => {
            write_result(open_service(store).anomalies(threshold, window), output)
        }

        Commands::Forecast { hours } => write_result(open_service(store).forecast(hours), output),

        Commands::ForecastNext => write_result(open_service(store).forecast_next(), output),

        Commands::Optimize => {
            write_result(open_service(store).optimize(&AlertLedger::new()), output)
        }

        Commands::Serve {
            host,
            port,
            interval_secs,
        } => run_serve(cli.store.clone(), host, port, interval_secs),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
