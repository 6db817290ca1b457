//! Delivery of service replies back to the requesting operator.

use speed_protocol::Payload;

use crate::host::PlayerId;
use crate::service::Reply;
use crate::transport::Transport;

/// Sender tag shown in front of one-line notifications.
pub const NOTIFY_PREFIX: &str = "ConfigSpeed";

/// Title of every configuration dialog.
pub const DIALOG_TITLE: &str = "ConfigSpeed";

/// Turns service replies into client-side payloads and sends them.
#[derive(Clone)]
pub struct Notifier {
    transport: Transport,
}

impl Notifier {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Sends a rich confirmation dialog. Fire and forget.
    pub fn confirm(&self, player: PlayerId, caption: String, body: String) {
        self.transport.send_to_player(
            player,
            Payload::Dialog {
                title: DIALOG_TITLE.to_string(),
                caption,
                body,
            },
        );
    }

    /// Sends a one-line rejection toast. Fire and forget.
    pub fn reject(&self, player: PlayerId, content: String) {
        self.transport.send_to_player(
            player,
            Payload::Text {
                prefix: NOTIFY_PREFIX.to_string(),
                content,
            },
        );
    }

    /// Delivers one reply to the player who asked for the change.
    pub fn deliver(&self, player: PlayerId, reply: Reply) {
        match reply {
            Reply::Dialog { caption, body } => self.confirm(player, caption, body),
            Reply::Text { content } => self.reject(player, content),
        }
    }
}
