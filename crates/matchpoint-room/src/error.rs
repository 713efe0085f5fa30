//! Error types for the room layer.

use matchpoint_protocol::RoomCode;

/// Typed failures for room operations.
///
/// Each one is reported to the requester as a protocol response; none of
/// them mutates registry state.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// No open room has this code.
    #[error("room {0} not found")]
    NotFound(RoomCode),

    /// A guest is already attached.
    #[error("room {0} is full")]
    RoomFull(RoomCode),

    /// The room has an access secret and the supplied one doesn't match.
    #[error("wrong password for room {0}")]
    AccessDenied(RoomCode),
}
