//! The session manager: the process-wide set of open connections.
//!
//! # Concurrency note
//!
//! `SessionManager` is NOT thread-safe by itself — it uses a plain
//! `HashMap`, not a concurrent one. The server owns it behind a single
//! `tokio::sync::Mutex` so that every read-check-write sequence (attach,
//! lobby filter, removal) happens under one lock acquisition.

use std::collections::HashMap;

use matchpoint_protocol::RoomCode;
use matchpoint_transport::ConnectionId;

use crate::{Attachment, PeerRole, PeerSender, Session};

/// Tracks every currently-open connection and its room attachment.
pub struct SessionManager {
    sessions: HashMap<ConnectionId, Session>,
}

impl SessionManager {
    /// Creates a new, empty session manager.
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Registers a freshly accepted connection, placing it in the lobby.
    ///
    /// Connection ids are process-unique, so an existing entry under the
    /// same id cannot occur.
    pub fn register(&mut self, id: ConnectionId, sender: PeerSender) {
        self.sessions.insert(id, Session::new(id, sender));
        tracing::debug!(%id, "session registered");
    }

    /// Removes a session, returning it so the caller can inspect its
    /// attachment for room cleanup. `None` if the id is unknown.
    pub fn remove(&mut self, id: ConnectionId) -> Option<Session> {
        self.sessions.remove(&id)
    }

    /// Looks up a session by connection id.
    pub fn get(&self, id: ConnectionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    /// Attaches a session to a room with the given role.
    ///
    /// No-ops (with a debug log) if the session is gone — the connection
    /// closed between the registry update and this call.
    pub fn attach(&mut self, id: ConnectionId, room: &RoomCode, role: PeerRole) {
        match self.sessions.get_mut(&id) {
            Some(session) => {
                session.attachment = Some(Attachment {
                    room: room.clone(),
                    role,
                });
                tracing::debug!(%id, %room, %role, "session attached to room");
            }
            None => {
                tracing::debug!(%id, %room, "attach skipped, session gone");
            }
        }
    }

    /// Iterates over every session still in the lobby (no room attached).
    ///
    /// This is the recipient set for lobby broadcasts; paired connections
    /// are filtered out here.
    pub fn lobby_sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.values().filter(|s| s.in_lobby())
    }

    /// Returns the number of open connections.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no connections are open.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
