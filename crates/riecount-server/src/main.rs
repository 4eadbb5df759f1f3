//! riecount server binary.
//!
//! Named counters persisted to a JSON file, served over HTTP:
//! - `/get_count`, `/get_all`, `/count` : JSON API
//! - `/` : HTML dashboard, `/docs` : API reference
//! - `/health`, `/metrics` : ops

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use riecount_server::{config, server};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = match config::load_from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    match server::run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "riecount-server stopped");
            ExitCode::FAILURE
        }
    }
}
