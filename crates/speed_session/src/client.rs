//! The client role: sends change requests, renders replies.

use std::sync::Arc;

use speed_protocol::{Envelope, Payload};
use tracing::debug;

use crate::error::SessionError;
use crate::host::ClientUi;
use crate::transport::Transport;

/// Client-side message handling for one local player.
pub struct ClientNode {
    ui: Arc<dyn ClientUi>,
    transport: Transport,
}

impl ClientNode {
    pub fn new(ui: Arc<dyn ClientUi>, transport: Transport) -> Self {
        Self { ui, transport }
    }

    /// Ships a change request to the server role.
    pub fn request_change(&self, key: &str, value: &str) {
        self.transport.send_to_server(Payload::ConfigChange {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    /// Handles an envelope tagged for the client side.
    pub fn process(&mut self, envelope: Envelope) -> Result<(), SessionError> {
        match envelope.payload {
            Payload::Dialog { title, caption, body } => {
                self.ui.show_dialog(&title, &caption, &body);
                Ok(())
            }
            Payload::Text { prefix, content } => {
                self.ui.show_text(&prefix, &content);
                Ok(())
            }
            // Change requests have no client-side meaning.
            Payload::ConfigChange { key, .. } => {
                debug!("Ignoring ConfigChange '{key}' addressed to the client role");
                Ok(())
            }
        }
    }
}
