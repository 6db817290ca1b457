//! Host-collaborator traits and identity types.
//!
//! The session layer never talks to a simulation directly. Everything it
//! needs from the surrounding world arrives through these four traits:
//! raw byte delivery, the player roster, the persisted variable store,
//! and the client's display surface. A test harness implements them with
//! in-process queues; a real embedding forwards to its engine.

use crate::error::SessionError;

/// Opaque numeric identity of a connected player.
pub type PlayerId = u64;

/// Host-assigned privilege tier of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PromoteLevel {
    /// Ordinary player, no configuration authority.
    None,
    Moderator,
    Admin,
    Owner,
}

/// How the local node participates in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Single-player. The lone player holds full authority.
    Offline,
    /// A player's machine is also the server.
    Hosted,
    /// Headless server with remote clients only.
    Dedicated,
    /// Pure client connected to a remote server.
    Client,
}

/// Roster entry for a connected player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInfo {
    pub id: PlayerId,
    pub display_name: String,
    pub promote_level: PromoteLevel,
    /// True when this player's machine hosts the world.
    pub is_host: bool,
}

impl PlayerInfo {
    /// Whether this player may change the configuration.
    ///
    /// Offline worlds grant authority unconditionally; otherwise the
    /// hosting player and anyone promoted to moderator or above qualify.
    pub fn is_admin(&self, mode: SessionMode) -> bool {
        mode == SessionMode::Offline
            || self.is_host
            || self.promote_level >= PromoteLevel::Moderator
    }
}

/// Identity of the local node, captured once at session start.
///
/// The transport stamps these values into every outgoing envelope.
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub local_player_id: PlayerId,
    pub local_display_name: String,
    /// Locale tag of the local UI, carried for the receiving side's logs.
    pub language: String,
    pub mode: SessionMode,
}

/// Raw byte delivery between nodes.
///
/// Implementations deliver to the named destination's inbox on the given
/// logical channel; the session layer never sees addressing beyond "the
/// server" and "a player". Configuration traffic always travels on
/// [`speed_protocol::CHANNEL_ID`], and hosts discard channels nothing
/// registered for.
pub trait ByteChannel {
    fn send_to_server(&self, channel: u16, raw: Vec<u8>) -> Result<(), SessionError>;
    fn send_to_player(&self, channel: u16, player: PlayerId, raw: Vec<u8>)
        -> Result<(), SessionError>;
}

/// Read access to the connected-player roster.
pub trait PlayerDirectory {
    fn find_player(&self, id: PlayerId) -> Option<PlayerInfo>;
    fn players(&self) -> Vec<PlayerInfo>;
}

/// The host's persisted key/value store, written on world save.
///
/// Takes `&self` so implementations choose their own interior
/// mutability; the session core stays single-threaded.
pub trait VariableStore {
    fn get_variable(&self, name: &str) -> Option<String>;
    fn set_variable(&self, name: &str, value: &str);
}

/// The client's display surface for confirmations and errors.
pub trait ClientUi {
    fn show_dialog(&self, title: &str, caption: &str, body: &str);
    fn show_text(&self, prefix: &str, content: &str);
}
