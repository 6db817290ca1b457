//! # Speed Protocol - Configuration Synchronization Wire Types
//!
//! The pure data layer of the speed-limit configuration protocol: the
//! versioned configuration record, the closed message family exchanged
//! between the authoritative server node and its clients, the key
//! canonicalization map, and the locale-independent value parsers.
//!
//! This crate performs no I/O. Everything here is plain data plus
//! deterministic validation, so the session layer (and its tests) can
//! exercise the protocol without a host simulation attached.
//!
//! ## Message Flow
//!
//! 1. A client wraps a change request in an [`Envelope`] tagged
//!    [`Side::ServerSide`] and ships it as bytes
//! 2. The server decodes the envelope, validates the request against the
//!    field ranges in [`keys`], and mutates its authoritative
//!    [`SpeedConfig`]
//! 3. Confirmation or rejection travels back as a `Dialog` or `Text`
//!    payload tagged [`Side::ClientSide`]
//!
//! ## Wire Format
//!
//! Envelopes are serialized with `serde_json`. Numeric values travel as
//! strings inside `ConfigChange` payloads and are parsed with
//! [`parse::parse_decimal`], which is locale-independent by construction.

pub use keys::ConfigKey;
pub use messages::{Envelope, Payload, Side};
pub use record::{SpeedConfig, StockDefaults};

pub mod keys;
pub mod messages;
pub mod parse;
pub mod record;

/// Protocol version stamped into every configuration record on creation
/// and repair. Bump when the record layout changes incompatibly.
pub const PROTOCOL_VERSION: u32 = 3;

/// Logical channel id shared by every node for configuration traffic.
/// The host's message delivery keys registration and sends on this value.
pub const CHANNEL_ID: u16 = 16_169;

/// Name of the persisted variable holding the serialized record in the
/// host's key/value store.
pub const CONFIG_VARIABLE: &str = "speed_config";
