//! Habit API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p habit-api
//! ```
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honored in development).

use habit_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first so tracing output matches the environment
    let config = AppConfig::from_env()?;

    if let Err(e) = try_init_tracing(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    info!("Starting Habit API Server...");
    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    // Run the server
    habit_api::run(config).await?;

    Ok(())
}
