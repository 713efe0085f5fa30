//! Unified error type for the Matchpoint server.

use matchpoint_protocol::ProtocolError;
use matchpoint_room::RoomError;
use matchpoint_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// Per-message failures never reach this type — the dispatcher converts
/// them to protocol replies or drops them. What's left is the startup and
/// accept path: binding the listener, and the codec/registry plumbing the
/// `?` operator threads through via the `#[from]` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MatchpointError {
    /// A transport-level error (bind, accept, connection).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A room-level error (not found, full, access denied).
    #[error(transparent)]
    Room(#[from] RoomError),
}
