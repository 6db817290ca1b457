//! In-process host implementation for tests and the demo launcher.
//!
//! [`LoopbackWorld`] implements every host trait with in-memory queues
//! and maps. Nothing crosses a real network: sends append to inboxes,
//! and the embedding drains those inboxes back into the sessions it
//! drives. The session core is single-threaded, so plain `RefCell`
//! interior mutability is enough here.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use speed_protocol::{StockDefaults, CHANNEL_ID};
use tracing::{debug, info};

use crate::error::SessionError;
use crate::host::{
    ByteChannel, ClientUi, PlayerDirectory, PlayerId, PlayerInfo, VariableStore,
};

/// An in-memory world: roster, variable store, and message inboxes.
#[derive(Default)]
pub struct LoopbackWorld {
    players: RefCell<HashMap<PlayerId, PlayerInfo>>,
    variables: RefCell<HashMap<String, String>>,
    server_inbox: RefCell<VecDeque<Vec<u8>>>,
    client_inboxes: RefCell<HashMap<PlayerId, VecDeque<Vec<u8>>>>,
}

impl LoopbackWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock simulation limits before any configuration is applied.
    pub fn stock_defaults() -> StockDefaults {
        StockDefaults {
            large_ship_max_speed: 100.0,
            small_ship_max_speed: 100.0,
            missile_min_speed: 100.0,
            missile_max_speed: 200.0,
            remote_control_max_speed: 100.0,
            container_drop_deploy_height: 200.0,
            respawn_ship_deploy_height: 300.0,
        }
    }

    /// Adds a player to the roster and opens its client inbox.
    pub fn add_player(&self, player: PlayerInfo) {
        self.client_inboxes
            .borrow_mut()
            .entry(player.id)
            .or_default();
        self.players.borrow_mut().insert(player.id, player);
    }

    pub fn remove_player(&self, id: PlayerId) {
        self.players.borrow_mut().remove(&id);
        self.client_inboxes.borrow_mut().remove(&id);
    }

    /// Takes everything queued for the server role.
    pub fn drain_server_inbox(&self) -> Vec<Vec<u8>> {
        self.server_inbox.borrow_mut().drain(..).collect()
    }

    /// Takes everything queued for one player's client role.
    pub fn drain_client_inbox(&self, player: PlayerId) -> Vec<Vec<u8>> {
        match self.client_inboxes.borrow_mut().get_mut(&player) {
            Some(inbox) => inbox.drain(..).collect(),
            None => Vec::new(),
        }
    }
}

impl ByteChannel for LoopbackWorld {
    fn send_to_server(&self, channel: u16, raw: Vec<u8>) -> Result<(), SessionError> {
        if channel != CHANNEL_ID {
            debug!("🗑️ Discarding {} bytes on unregistered channel {channel}", raw.len());
            return Ok(());
        }
        self.server_inbox.borrow_mut().push_back(raw);
        Ok(())
    }

    fn send_to_player(
        &self,
        channel: u16,
        player: PlayerId,
        raw: Vec<u8>,
    ) -> Result<(), SessionError> {
        if channel != CHANNEL_ID {
            debug!("🗑️ Discarding {} bytes on unregistered channel {channel}", raw.len());
            return Ok(());
        }
        match self.client_inboxes.borrow_mut().get_mut(&player) {
            Some(inbox) => {
                inbox.push_back(raw);
                Ok(())
            }
            None => Err(SessionError::Channel(format!(
                "player {player} is not connected"
            ))),
        }
    }
}

impl PlayerDirectory for LoopbackWorld {
    fn find_player(&self, id: PlayerId) -> Option<PlayerInfo> {
        self.players.borrow().get(&id).cloned()
    }

    fn players(&self) -> Vec<PlayerInfo> {
        self.players.borrow().values().cloned().collect()
    }
}

impl VariableStore for LoopbackWorld {
    fn get_variable(&self, name: &str) -> Option<String> {
        self.variables.borrow().get(name).cloned()
    }

    fn set_variable(&self, name: &str, value: &str) {
        self.variables
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }
}

/// A display surface that renders into the log stream.
pub struct TracingUi;

impl ClientUi for TracingUi {
    fn show_dialog(&self, title: &str, caption: &str, body: &str) {
        info!("📋 [{title}] {caption}\n{body}");
    }

    fn show_text(&self, prefix: &str, content: &str) {
        info!("💬 {prefix}: {content}");
    }
}
