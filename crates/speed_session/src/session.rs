//! The per-node session facade.

use std::sync::Arc;

use speed_protocol::{Payload, StockDefaults};
use tracing::{info, warn};

use crate::client::ClientNode;
use crate::command::parse_chat_command;
use crate::dispatch;
use crate::error::SessionError;
use crate::host::{ByteChannel, ClientUi, PlayerDirectory, SessionIdentity, VariableStore};
use crate::server::ServerNode;
use crate::transport::Transport;

/// One node's view of the configuration protocol.
///
/// A session is created per node and registers the roles that node
/// plays: a dedicated server registers only the server role, a pure
/// client only the client role, and a hosting player both. There is no
/// global instance; embeddings own their session and pump it from their
/// own update loop.
pub struct Session {
    transport: Transport,
    server: Option<ServerNode>,
    client: Option<ClientNode>,
}

impl Session {
    pub fn new(channel: Arc<dyn ByteChannel>, identity: SessionIdentity) -> Self {
        Self {
            transport: Transport::new(channel, identity),
            server: None,
            client: None,
        }
    }

    pub fn identity(&self) -> &SessionIdentity {
        self.transport.identity()
    }

    /// Stands up the server role: loads and repairs the persisted
    /// record and starts answering change requests. Registering twice
    /// is a logged no-op.
    pub fn init_server(
        &mut self,
        store: Arc<dyn VariableStore>,
        directory: Arc<dyn PlayerDirectory>,
        defaults: StockDefaults,
    ) {
        if self.server.is_some() {
            warn!("⚠️ Server role already registered, ignoring");
            return;
        }
        let notifier = crate::notify::Notifier::new(self.transport.clone());
        let mode = self.transport.identity().mode;
        self.server = Some(ServerNode::new(store, directory, notifier, defaults, mode));
        info!("✅ Server role registered");
    }

    /// Stands up the client role with its display surface. Registering
    /// twice is a logged no-op.
    pub fn init_client(&mut self, ui: Arc<dyn ClientUi>) {
        if self.client.is_some() {
            warn!("⚠️ Client role already registered, ignoring");
            return;
        }
        self.client = Some(ClientNode::new(ui, self.transport.clone()));
        info!("✅ Client role registered");
    }

    pub fn server(&self) -> Option<&ServerNode> {
        self.server.as_ref()
    }

    /// Offers one chat line to the command surface.
    ///
    /// Returns true when the line was a configuration command and has
    /// been consumed; the embedding should then suppress it from normal
    /// chat. The request always travels through the channel, even when
    /// this node hosts the server role itself.
    pub fn on_chat_message(&self, text: &str) -> bool {
        let Some(command) = parse_chat_command(text) else {
            return false;
        };
        match &self.client {
            Some(client) => client.request_change(&command.key, &command.value),
            // Headless console input has no client role; send directly.
            None => self.transport.send_to_server(Payload::ConfigChange {
                key: command.key,
                value: command.value,
            }),
        }
        true
    }

    /// Feeds one raw message from the host's channel into dispatch.
    pub fn on_network_message(&mut self, raw: &[u8]) {
        let Some(envelope) = dispatch::decode_envelope(raw) else {
            return;
        };
        dispatch::route(self.server.as_mut(), self.client.as_mut(), envelope);
    }

    /// Persists the configuration. Only the server role writes; on any
    /// other node this is a no-op.
    pub fn save(&self) -> Result<(), SessionError> {
        match &self.server {
            Some(server) => server.save(),
            None => Ok(()),
        }
    }

    /// Tears down both roles, persisting first. Safe to call twice.
    pub fn shutdown(&mut self) {
        if let Some(server) = &self.server {
            if let Err(error) = server.save() {
                warn!("⚠️ Failed to persist configuration on shutdown: {error}");
            }
        }
        let had_roles = self.server.take().is_some() | self.client.take().is_some();
        if had_roles {
            info!("👋 Speed configuration session shut down");
        }
    }
}
