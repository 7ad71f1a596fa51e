//! DriveWatch - monitoring client entry point.
//!
//! Handles configuration loading, logging initialization, session startup,
//! and the stop-before-exit guarantee.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use dw_core::camera::TestPatternSource;
use dw_core::config::ConfigManager;
use dw_core::logging::init_tracing;

mod session;
mod transport;
mod ui;

use session::{MonitorSession, UpdateCallback};
use transport::InferenceClient;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first (needed for the log level)
    let config_path = default_config_path();
    let mut config_manager = ConfigManager::new(&config_path);

    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    init_tracing(config_manager.settings().logging.level);

    tracing::info!("DriveWatch starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", dw_core::version());

    let settings = config_manager.settings().clone();

    // The built-in pattern source stands in for a platform capture backend;
    // anything implementing FrameSource can be dropped in here.
    let source =
        TestPatternSource::new(settings.capture.width, settings.capture.height).with_warmup(2);

    let client = InferenceClient::new(&settings.backend).context("building backend client")?;
    let on_update: UpdateCallback = Arc::new(|state| ui::render(&state));

    let mut session = MonitorSession::new(&settings, Box::new(source), client, on_update);

    // Camera errors are user-correctable: report and exit cleanly.
    session.start().context("camera unavailable")?;
    tracing::info!("Monitoring. Press Ctrl-C to stop.");

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;

    // Stop before teardown so the capture device is released.
    session.stop();
    tracing::info!("DriveWatch stopped");
    Ok(())
}
