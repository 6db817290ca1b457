//! Inbound message dispatch: decode, route, isolate.

use speed_protocol::{Envelope, Side};
use tracing::{debug, error, warn};

use crate::client::ClientNode;
use crate::server::ServerNode;

/// Decodes raw channel bytes into an envelope.
///
/// Undecodable input is logged with its length and dropped. The payload
/// itself is not logged; it may be arbitrary garbage.
pub fn decode_envelope(raw: &[u8]) -> Option<Envelope> {
    match Envelope::decode(raw) {
        Ok(envelope) => Some(envelope),
        Err(error) => {
            warn!("🗑️ Dropping undecodable message ({} bytes): {error}", raw.len());
            None
        }
    }
}

/// Routes a decoded envelope to the role named by its side tag.
///
/// A node without that role drops the message quietly; a handler error
/// is logged here and goes no further, so the message pump survives any
/// single bad message.
pub fn route(
    server: Option<&mut ServerNode>,
    client: Option<&mut ClientNode>,
    envelope: Envelope,
) {
    let kind = envelope.payload.kind();
    let side = envelope.side;
    let result = match side {
        Side::ServerSide => match server {
            Some(node) => node.process(envelope),
            None => {
                debug!("Ignoring {kind}: no server role on this node");
                Ok(())
            }
        },
        Side::ClientSide => match client {
            Some(node) => node.process(envelope),
            None => {
                debug!("Ignoring {kind}: no client role on this node");
                Ok(())
            }
        },
    };
    if let Err(error) = result {
        error!("💥 {kind} handler failed on {side:?}: {error}");
    }
}
