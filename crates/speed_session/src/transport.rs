//! Outbound messaging: identity stamping and side tagging.

use std::sync::Arc;

use speed_protocol::{Envelope, Payload, Side, CHANNEL_ID};
use tracing::warn;

use crate::host::{ByteChannel, PlayerDirectory, PlayerId, SessionIdentity};

/// Sends envelopes through the host's byte channel.
///
/// Every outgoing message is stamped with the local identity and the
/// side that must process it, immediately before transmission. Callers
/// hand over a bare payload; they cannot influence the sender fields.
///
/// Delivery failures are logged and swallowed: a full client inbox or a
/// just-disconnected player must not abort the operation that triggered
/// the send.
#[derive(Clone)]
pub struct Transport {
    channel: Arc<dyn ByteChannel>,
    identity: SessionIdentity,
}

impl Transport {
    pub fn new(channel: Arc<dyn ByteChannel>, identity: SessionIdentity) -> Self {
        Self { channel, identity }
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    /// Sends a payload to the authoritative server role.
    pub fn send_to_server(&self, payload: Payload) {
        let kind = payload.kind();
        match self.stamp(Side::ServerSide, payload).encode() {
            Ok(raw) => {
                if let Err(error) = self.channel.send_to_server(CHANNEL_ID, raw) {
                    warn!("⚠️ Failed to send {kind} to server: {error}");
                }
            }
            Err(error) => warn!("⚠️ Failed to encode {kind} for server: {error}"),
        }
    }

    /// Sends a payload to one player's client role.
    pub fn send_to_player(&self, player: PlayerId, payload: Payload) {
        let kind = payload.kind();
        match self.stamp(Side::ClientSide, payload).encode() {
            Ok(raw) => {
                if let Err(error) = self.channel.send_to_player(CHANNEL_ID, player, raw) {
                    warn!("⚠️ Failed to send {kind} to player {player}: {error}");
                }
            }
            Err(error) => warn!("⚠️ Failed to encode {kind} for player {player}: {error}"),
        }
    }

    /// Sends the same payload to every connected player.
    pub fn send_to_all_players(&self, directory: &dyn PlayerDirectory, payload: Payload) {
        for player in directory.players() {
            self.send_to_player(player.id, payload.clone());
        }
    }

    fn stamp(&self, side: Side, payload: Payload) -> Envelope {
        Envelope {
            sender_id: self.identity.local_player_id,
            sender_name: self.identity.local_display_name.clone(),
            sender_language: self.identity.language.clone(),
            side,
            payload,
        }
    }
}
