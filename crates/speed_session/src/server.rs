//! The server role: authority checks, change application, persistence.

use std::sync::Arc;

use speed_protocol::{Envelope, Payload, SpeedConfig, StockDefaults, CONFIG_VARIABLE};
use tracing::{debug, info, warn};

use crate::error::SessionError;
use crate::host::{PlayerDirectory, PlayerId, SessionMode, VariableStore};
use crate::notify::Notifier;
use crate::service::ConfigService;

/// Server-side message handling and the authoritative record.
pub struct ServerNode {
    service: ConfigService,
    directory: Arc<dyn PlayerDirectory>,
    store: Arc<dyn VariableStore>,
    notifier: Notifier,
    mode: SessionMode,
}

impl ServerNode {
    /// Loads the persisted record (repairing as needed) and stands up
    /// the server role.
    pub fn new(
        store: Arc<dyn VariableStore>,
        directory: Arc<dyn PlayerDirectory>,
        notifier: Notifier,
        defaults: StockDefaults,
        mode: SessionMode,
    ) -> Self {
        let raw = store.get_variable(CONFIG_VARIABLE);
        let config = SpeedConfig::load(raw.as_deref(), &defaults);
        info!(
            "🚀 Speed configuration loaded: large {} m/s, small {} m/s",
            config.large_ship_max_speed, config.small_ship_max_speed
        );
        let service = ConfigService::new(config, defaults);
        Self { service, directory, store, notifier, mode }
    }

    pub fn service(&self) -> &ConfigService {
        &self.service
    }

    /// Handles an envelope tagged for the server side.
    pub fn process(&mut self, envelope: Envelope) -> Result<(), SessionError> {
        match envelope.payload {
            Payload::ConfigChange { key, value } => {
                self.handle_config_change(envelope.sender_id, &envelope.sender_name, &key, &value);
                Ok(())
            }
            // Display payloads have no server-side meaning.
            Payload::Dialog { .. } | Payload::Text { .. } => {
                debug!("Ignoring display payload addressed to the server role");
                Ok(())
            }
        }
    }

    fn handle_config_change(
        &mut self,
        sender_id: PlayerId,
        sender_name: &str,
        key: &str,
        value: &str,
    ) {
        let Some(player) = self.directory.find_player(sender_id) else {
            // Stale or spoofed identity. No reply; there is nobody to
            // reply to.
            warn!("🛑 Dropping config change from unknown sender {sender_id} ('{sender_name}')");
            return;
        };
        if !player.is_admin(self.mode) {
            warn!(
                "🛑 Player '{}' ({sender_id}) attempted '{key}' without authority",
                player.display_name
            );
            return;
        }
        let reply = self.service.apply(key, value);
        self.notifier.deliver(sender_id, reply);
    }

    /// Persists the record into the host's variable store, but only when
    /// something actually changed.
    pub fn save(&self) -> Result<(), SessionError> {
        if !self.service.is_modified() {
            debug!("Speed configuration unchanged, skipping save");
            return Ok(());
        }
        let json = self.service.config().to_json()?;
        self.store.set_variable(CONFIG_VARIABLE, &json);
        info!("💾 Speed configuration saved");
        Ok(())
    }
}
