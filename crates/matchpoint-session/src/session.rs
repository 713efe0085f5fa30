//! Session types: the data structures that represent a client's connection.

use std::fmt;

use matchpoint_protocol::{RoomCode, ServerMessage};
use matchpoint_transport::ConnectionId;
use tokio::sync::mpsc;

/// Channel for pushing outbound messages to a connection's writer task.
///
/// Unbounded so a push never blocks the dispatcher; if the receiving side
/// is gone the push fails and the failure is swallowed by [`Session::push`].
pub type PeerSender = mpsc::UnboundedSender<ServerMessage>;

// ---------------------------------------------------------------------------
// PeerRole
// ---------------------------------------------------------------------------

/// Which side of a room a connection occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerRole {
    /// Created the room.
    Host,
    /// Joined the room by code.
    Guest,
}

impl fmt::Display for PeerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Guest => write!(f, "guest"),
        }
    }
}

// ---------------------------------------------------------------------------
// Attachment
// ---------------------------------------------------------------------------

/// A session's link to a room.
///
/// The attachment persists until the connection itself closes — including
/// after the room is torn down by the counterpart's disconnect. A session
/// that has ever been paired therefore never rejoins the lobby.
#[derive(Debug, Clone)]
pub struct Attachment {
    /// Code of the room this connection belongs to.
    pub room: RoomCode,
    /// The side it occupies there.
    pub role: PeerRole,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One live client connection as the server tracks it.
#[derive(Debug, Clone)]
pub struct Session {
    /// The connection this session belongs to.
    pub id: ConnectionId,

    /// Outbound push channel, drained by the connection's writer task.
    pub sender: PeerSender,

    /// The room this connection is attached to, or `None` while in the
    /// lobby. A connection belongs to at most one room at a time.
    pub attachment: Option<Attachment>,
}

impl Session {
    /// Creates a session for a freshly accepted connection, in the lobby.
    pub fn new(id: ConnectionId, sender: PeerSender) -> Self {
        Self {
            id,
            sender,
            attachment: None,
        }
    }

    /// Returns `true` if this connection is not attached to any room.
    pub fn in_lobby(&self) -> bool {
        self.attachment.is_none()
    }

    /// Pushes a message to this connection, fire-and-forget.
    ///
    /// A closed channel means the connection is on its way out; its own
    /// disconnect handling takes over, so the failure is only logged.
    pub fn push(&self, msg: ServerMessage) {
        if self.sender.send(msg).is_err() {
            tracing::debug!(id = %self.id, "dropped message for closed connection");
        }
    }
}
