//! # Speedhost - Demo Host for the Speed Configuration Protocol
//!
//! An interactive, in-process host that wires a `speed_session` server
//! role and client role together over the loopback world. This entry
//! point handles CLI parsing, configuration loading, and application
//! lifecycle management.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run with default configuration
//! speedhost
//!
//! # Specify custom configuration and world store
//! speedhost --config production.toml --world saves/world.json
//!
//! # Override specific settings
//! speedhost --name midspace --log-level debug
//!
//! # JSON logging for production
//! speedhost --json-logs
//! ```
//!
//! ## Configuration
//!
//! The server loads configuration from a TOML file (default:
//! `speedhost.toml`). If the file doesn't exist, a default configuration
//! will be created.
//!
//! ## Signal Handling
//!
//! The console persists the configuration and shuts down gracefully on:
//! - SIGINT (Ctrl+C)
//! - SIGTERM (Unix systems)

use tracing::error;

mod app;
mod cli;
mod config;
mod logging;
mod signals;
mod store;

use app::Application;
use cli::CliArgs;
use config::AppConfig;

/// Main entry point for the speedhost demo server.
///
/// Handles the complete application lifecycle including:
/// 1. Command-line argument parsing
/// 2. Configuration loading and validation
/// 3. Logging system initialization
/// 4. Application creation and execution
/// 5. Error handling and cleanup
///
/// # Exit Codes
///
/// * **0**: Successful execution and shutdown
/// * **1**: Error during startup, configuration, or runtime
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments first
    let args = CliArgs::parse();

    // Load configuration to get logging settings
    let mut config = AppConfig::load_from_file(&args.config_path)
        .await
        .unwrap_or_default();

    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }

    // Setup logging before anything else
    if let Err(e) = logging::setup_logging(&config.logging, args.json_logs) {
        eprintln!("❌ Failed to setup logging: {e}");
        std::process::exit(1);
    }

    // Create and run application
    match Application::new(args).await {
        Ok(app) => {
            if let Err(e) = app.run().await {
                error!("❌ Application error: {e:?}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("❌ Failed to start application: {e:?}");
            std::process::exit(1);
        }
    }

    Ok(())
}

// Re-export main types for potential library usage
pub use config::{LoggingSettings, OperatorSettings, WorldSettings};
pub use store::FileStore;
