//! Main application logic and lifecycle management.
//!
//! This module contains the core `Application` struct that orchestrates
//! world setup, the operator console loop, and graceful shutdown.

use crate::{cli::CliArgs, config::AppConfig, logging::display_banner, signals, store::FileStore};
use speed_session::{
    LoopbackWorld, PlayerId, PlayerInfo, PromoteLevel, Session, SessionIdentity, SessionMode,
    TracingUi,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Main application struct for the speedhost demo server.
///
/// Manages the complete lifecycle: configuration loading, world and
/// session setup, the interactive console, and graceful shutdown with
/// persistence.
pub struct Application {
    /// Loaded application configuration
    config: AppConfig,
}

impl Application {
    /// Creates a new application instance.
    ///
    /// Loads configuration, applies CLI overrides, validates settings,
    /// and displays the startup banner.
    ///
    /// # Arguments
    ///
    /// * `args` - Parsed command-line arguments
    ///
    /// # Returns
    ///
    /// A configured `Application` instance ready to run, or an error if
    /// initialization failed.
    pub async fn new(args: CliArgs) -> Result<Self, Box<dyn std::error::Error>> {
        info!("🔧 Loading configuration from: {}", args.config_path.display());
        let mut config = AppConfig::load_from_file(&args.config_path).await?;

        // Apply CLI overrides
        if let Some(world_path) = args.world_path {
            config.world.store_path = world_path.to_string_lossy().to_string();
        }

        if let Some(operator_name) = args.operator_name {
            config.operator.name = operator_name;
        }

        if let Some(log_level) = args.log_level {
            config.logging.level = log_level;
        }

        if args.json_logs {
            config.logging.json_format = true;
        }

        if let Err(e) = config.validate() {
            return Err(format!("Configuration validation failed: {e}").into());
        }
        info!("✅ Configuration loaded and validated successfully");

        display_banner();

        info!(
            "📂 Config: {} | World store: {}",
            args.config_path.display(),
            config.world.store_path
        );

        Ok(Self { config })
    }

    /// Runs the operator console until shutdown.
    ///
    /// Builds the loopback world with the hosting operator as its single
    /// admin player, stands up a session carrying both roles, and feeds
    /// console lines into the command surface. Every accepted command is
    /// pumped through the world's inboxes so the full request/reply round
    /// trip runs exactly as it would between separate nodes.
    ///
    /// # Returns
    ///
    /// `Ok(())` once the console exits and the configuration has been
    /// persisted, or an error on console I/O failure.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let world = Arc::new(LoopbackWorld::new());
        let operator_id = self.config.operator.id;
        world.add_player(PlayerInfo {
            id: operator_id,
            display_name: self.config.operator.name.clone(),
            promote_level: PromoteLevel::Owner,
            is_host: true,
        });

        let store = Arc::new(FileStore::open(&self.config.world.store_path));
        let mut session = Session::new(
            world.clone(),
            SessionIdentity {
                local_player_id: operator_id,
                local_display_name: self.config.operator.name.clone(),
                language: self.config.operator.language.clone(),
                mode: SessionMode::Hosted,
            },
        );
        session.init_server(store, world.clone(), self.config.to_stock_defaults());
        session.init_client(Arc::new(TracingUi));

        info!("⌨️ Ready. Type /configspeed commands, or 'quit' to exit");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let shutdown = signals::wait_for_shutdown();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                result = &mut shutdown => {
                    result?;
                    break;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        // stdin closed
                        break;
                    };
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
                        break;
                    }
                    if session.on_chat_message(trimmed) {
                        Self::pump(&world, &mut session, operator_id);
                    } else {
                        info!("💬 Unrecognized input, try /configspeed");
                    }
                }
            }
        }

        session.shutdown();
        info!("✅ Speedhost stopped cleanly");
        Ok(())
    }

    /// Drains both directions of the loopback world through the session.
    fn pump(world: &LoopbackWorld, session: &mut Session, operator: PlayerId) {
        for raw in world.drain_server_inbox() {
            session.on_network_message(&raw);
        }
        for raw in world.drain_client_inbox(operator) {
            session.on_network_message(&raw);
        }
    }
}
