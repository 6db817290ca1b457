//! Message envelope and payload definitions for node-to-node traffic.
//!
//! The protocol is a closed set: one envelope carrying sender identity and
//! a routing side, and exactly three payload variants. Routing is an
//! exhaustive match on `(side, payload)` in the session layer, so adding a
//! variant is a compile-time event, not a runtime surprise.

use serde::{Deserialize, Serialize};

/// Which node type must process a message.
///
/// The side is stamped by the transport immediately before transmission
/// and states where the message must be *processed*, not where it
/// originated: requests travel `ServerSide`, responses `ClientSide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Processed by the client role of the receiving node.
    ClientSide,
    /// Processed by the authoritative server role.
    ServerSide,
}

/// The closed payload family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Payload {
    /// A single configuration change request, or (with an empty `key`)
    /// a "show current settings" query. `value` is deferred-parsed on the
    /// server so a malformed number is a validation failure there, never
    /// a decode failure here.
    ConfigChange {
        /// Alias of the field to set (resolved through `ConfigKey`).
        key: String,
        /// Requested value, still as typed by the operator.
        value: String,
    },
    /// A rich confirmation/report shown to one recipient in a dialog box.
    Dialog {
        title: String,
        caption: String,
        body: String,
    },
    /// A short one-line toast, typically a validation error.
    Text {
        /// Sender tag shown in front of the message (e.g. "ConfigSpeed").
        prefix: String,
        content: String,
    },
}

impl Payload {
    /// Short variant name for log lines at the dispatch boundary.
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::ConfigChange { .. } => "ConfigChange",
            Payload::Dialog { .. } => "Dialog",
            Payload::Text { .. } => "Text",
        }
    }
}

/// A transferable message: sender identity, routing side, payload.
///
/// Sender fields are populated by the transport from the local session
/// identity at send time, never from caller input, so a client cannot
/// spoof another player's identity on the sending side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Opaque numeric identity of the sender.
    pub sender_id: u64,
    /// Display name of the sender, for logs and security warnings.
    pub sender_name: String,
    /// Locale tag of the sender's UI.
    pub sender_language: String,
    /// Which side must process this message.
    pub side: Side,
    /// The actual payload.
    pub payload: Payload,
}

impl Envelope {
    /// Serializes the envelope for the host's byte channel.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Deserializes an envelope received from the host's byte channel.
    pub fn decode(raw: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(raw)
    }
}
