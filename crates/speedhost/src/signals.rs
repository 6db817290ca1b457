//! Signal handling for graceful server shutdown.
//!
//! This module provides cross-platform signal handling so the demo
//! server can persist its configuration before exiting.

use tokio::signal;
use tracing::info;

/// Waits for a termination signal.
///
/// Listens for SIGINT and SIGTERM on Unix (Ctrl+C on Windows) and
/// returns when one is received.
///
/// # Returns
///
/// `Ok(())` when a shutdown signal is received, or an error if signal
/// handling setup failed.
pub async fn wait_for_shutdown() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    {
        use signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            _ = sigint.recv() => (),
            _ = sigterm.recv() => ()
        }
    }

    #[cfg(windows)]
    signal::ctrl_c().await?;

    info!("📡 Received shutdown signal - initiating graceful shutdown");
    Ok(())
}
