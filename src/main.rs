//! Planboard Server
//!
//! Run with: cargo run --bin planboard
//!
//! Configuration is read from `~/.config/planboard/config.toml`,
//! `/etc/planboard/config.toml` or `./config.toml`, with `PLANBOARD_*`
//! environment overrides. `RUST_LOG` overrides the configured log level.

use planboard::api::{serve, AppState};
use planboard::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    planboard::logging::init(&config.logging);

    tracing::info!("Starting Planboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Report service: {}", config.source.base_url);
    match &config.source.fixture_path {
        Some(path) => tracing::info!("Fixture plan: {:?}", path),
        None => tracing::info!("Fixture plan: bundled example"),
    }

    let server = config.server.clone();
    let state = AppState::from_config(config)?;

    serve(state, &server).await?;

    Ok(())
}
