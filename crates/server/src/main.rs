//! # logiops-server
//!
//! Entry point: loads `.env`, installs logging and serves the KPI API.

use logiops_server::{init_tracing, run, ServerConfig};

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    init_tracing("logiops_server=info,data_core=info,tower_http=info");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
