//! # Speed Session - Node Logic for the Configuration Protocol
//!
//! The behavioral layer on top of `speed_protocol`: per-node sessions,
//! the server role that owns and validates the authoritative record, the
//! client role that renders replies, and the dispatch boundary that
//! keeps one bad message from taking a node down.
//!
//! ## Architecture
//!
//! - [`Session`] is the per-node facade. There is no global instance;
//!   the embedding owns it and pumps chat lines and raw channel bytes in
//! - The host simulation is abstracted behind four traits in [`host`]:
//!   [`ByteChannel`], [`PlayerDirectory`], [`VariableStore`], [`ClientUi`]
//! - [`ServerNode`] gates every change on [`PlayerInfo::is_admin`] and
//!   applies it through [`ConfigService`]
//! - [`ClientNode`] turns reply payloads into dialog and toast calls
//! - [`LoopbackWorld`] implements all four host traits with in-memory
//!   queues for tests and the demo launcher
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use speed_session::{
//!     LoopbackWorld, PlayerInfo, PromoteLevel, Session, SessionIdentity, SessionMode,
//! };
//!
//! let world = Arc::new(LoopbackWorld::new());
//! world.add_player(PlayerInfo {
//!     id: 1,
//!     display_name: "host".to_string(),
//!     promote_level: PromoteLevel::Owner,
//!     is_host: true,
//! });
//!
//! let mut session = Session::new(
//!     world.clone(),
//!     SessionIdentity {
//!         local_player_id: 1,
//!         local_display_name: "host".to_string(),
//!         language: "en".to_string(),
//!         mode: SessionMode::Hosted,
//!     },
//! );
//! session.init_server(world.clone(), world.clone(), LoopbackWorld::stock_defaults());
//!
//! assert!(session.on_chat_message("/maxspeed 500"));
//! for raw in world.drain_server_inbox() {
//!     session.on_network_message(&raw);
//! }
//! ```

pub use client::ClientNode;
pub use command::{parse_chat_command, ChatCommand};
pub use error::SessionError;
pub use host::{
    ByteChannel, ClientUi, PlayerDirectory, PlayerId, PlayerInfo, PromoteLevel, SessionIdentity,
    SessionMode, VariableStore,
};
pub use loopback::{LoopbackWorld, TracingUi};
pub use notify::{Notifier, DIALOG_TITLE, NOTIFY_PREFIX};
pub use server::ServerNode;
pub use service::{ConfigService, Reply};
pub use session::Session;
pub use transport::Transport;

pub mod client;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod loopback;
pub mod notify;
pub mod server;
pub mod service;
pub mod session;
pub mod transport;

#[cfg(test)]
mod tests;
