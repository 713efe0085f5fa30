//! Wire protocol for Matchpoint.
//!
//! This crate defines the "language" that clients and the signaling server
//! speak:
//!
//! - **Types** ([`ClientMessage`], [`ServerMessage`], [`RoomSummary`], etc.)
//!   — the message structures that travel on the wire.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how those messages are
//!   converted to/from bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong during
//!   encoding/decoding.
//!
//! # Architecture
//!
//! The protocol layer sits between transport (raw bytes) and the server's
//! dispatcher. It doesn't know about connections, sessions, or rooms — it
//! only knows how to serialize and deserialize messages.
//!
//! Handshake payloads (`sdp`, `candidate`) are carried as opaque JSON
//! values. The server relays them verbatim and never inspects their
//! contents; their meaning is entirely the peers' concern.

mod codec;
mod error;
mod types;

pub use codec::{Codec, JsonCodec};
pub use error::ProtocolError;
pub use types::{ClientMessage, RoomCode, RoomSummary, ServerMessage};
