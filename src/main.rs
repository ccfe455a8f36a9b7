use anyhow::Result;
use geovis::{config::Config, server};
use std::env;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .init();
    info!("Starting restaurant map backend");

    // ─── 2) configure ────────────────────────────────────────────────
    let cfg = Config::from_env();
    if !cfg.data_path.is_file() {
        // each request re-reads the file
        warn!(path = %cfg.data_path.display(), "dataset not found yet");
    }
    info!(path = %cfg.data_path.display(), "serving dataset");

    // ─── 3) serve ────────────────────────────────────────────────────
    server::serve(cfg).await;
    Ok(())
}
