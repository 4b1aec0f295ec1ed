//! Launchboard HTTP Server Binary
//!
//! Entry point for the dashboard REST API. It loads the launch dataset once,
//! sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin launchboard-server
//!
//! # Against a different dataset
//! DATASET_PATH=/data/spacex_launch_dash.csv cargo run --bin launchboard-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATASET_PATH`: Launch records CSV (default: data/launches.csv)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use launchboard::config::AppConfig;
use launchboard::dataset;
use launchboard::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Launchboard HTTP Server");

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Load the dataset once; it is immutable for the process lifetime.
    // A missing or malformed dataset is a startup failure.
    let dataset = dataset::load_csv(&config.dataset_path)
        .map_err(|e| anyhow::anyhow!("failed to load dataset '{}': {}", config.dataset_path, e))?;
    let bounds = dataset.payload_bounds();
    info!(
        records = dataset.len(),
        min_payload = bounds.min,
        max_payload = bounds.max,
        "Dataset loaded from {}",
        config.dataset_path
    );

    // Create application state
    let state = AppState::new(Arc::new(dataset));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
