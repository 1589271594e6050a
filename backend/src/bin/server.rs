//! Opening hours HTTP server binary.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin hours-server
//!
//! # With a configuration file
//! HOURS_CONFIG=hours.toml cargo run --bin hours-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOURS_CONFIG`: TOML configuration file (optional)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `BODY_LIMIT`: Largest request body in bytes (default: 65536)
//! - `RUST_LOG`: Log filter (default: info)

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use opening_hours::config::ServerConfig;
use opening_hours::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting opening hours HTTP server");

    let addr = config.bind_address()?;
    let app = create_router(AppState::new(config));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
