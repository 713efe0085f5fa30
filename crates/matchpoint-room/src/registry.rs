//! The room registry: creates, tracks, and removes rooms.

use std::collections::HashMap;

use matchpoint_protocol::{RoomCode, RoomSummary};
use matchpoint_transport::ConnectionId;
use rand::Rng;

use crate::{Room, RoomError, RoomVisibility};

/// Length of a generated room code.
const CODE_LEN: usize = 5;

/// Alphabet room codes are drawn from. 36^5 ≈ 60M combinations, so a
/// collision redraw is practically never needed at realistic room counts.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Owns the mapping from room code to room state.
///
/// This is the entry point for every room operation from the dispatcher:
/// create, join, list, remove. It is kept behind one mutex by the server;
/// see the crate docs for the single-writer rationale.
pub struct RoomRegistry {
    rooms: HashMap<RoomCode, Room>,
}

impl RoomRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    /// Opens a new room with the requesting connection as host and an
    /// empty guest slot, and returns its freshly generated code.
    ///
    /// An empty-string secret counts as no secret at all.
    pub fn create_room(
        &mut self,
        host: ConnectionId,
        display_name: String,
        visibility: RoomVisibility,
        access_secret: Option<String>,
    ) -> RoomCode {
        let code = self.generate_code();
        let access_secret = access_secret.filter(|s| !s.is_empty());

        tracing::info!(
            %code,
            name = %display_name,
            public = visibility.is_public(),
            locked = access_secret.is_some(),
            "room created"
        );

        self.rooms.insert(
            code.clone(),
            Room {
                code: code.clone(),
                display_name,
                visibility,
                access_secret,
                host,
                guest: None,
            },
        );
        code
    }

    /// Attaches `guest` to the room with this code.
    ///
    /// Checks run in the same order the failures are reported: existence,
    /// then capacity, then the access secret.
    ///
    /// # Errors
    /// - [`RoomError::NotFound`] — no open room has this code
    /// - [`RoomError::RoomFull`] — a guest is already attached
    /// - [`RoomError::AccessDenied`] — the supplied secret doesn't match
    pub fn join_room(
        &mut self,
        code: &RoomCode,
        guest: ConnectionId,
        supplied_secret: Option<&str>,
    ) -> Result<&Room, RoomError> {
        let room = self
            .rooms
            .get_mut(code)
            .ok_or_else(|| RoomError::NotFound(code.clone()))?;

        if room.guest.is_some() {
            return Err(RoomError::RoomFull(code.clone()));
        }
        if !room.secret_matches(supplied_secret) {
            return Err(RoomError::AccessDenied(code.clone()));
        }

        room.guest = Some(guest);
        tracing::info!(%code, %guest, "guest joined room");
        Ok(room)
    }

    /// Returns a listing entry for every public room whose guest slot is
    /// still empty. Order is unspecified.
    pub fn list_public(&self) -> Vec<RoomSummary> {
        self.rooms
            .values()
            .filter(|r| r.visibility.is_public() && r.is_joinable())
            .map(Room::summary)
            .collect()
    }

    /// Removes the room with this code, returning it if it was present.
    /// Idempotent: removing an unknown code is a no-op.
    pub fn remove(&mut self, code: &RoomCode) -> Option<Room> {
        let removed = self.rooms.remove(code);
        if removed.is_some() {
            tracing::info!(%code, "room closed");
        }
        removed
    }

    /// Looks up a room by code.
    pub fn get(&self, code: &RoomCode) -> Option<&Room> {
        self.rooms.get(code)
    }

    /// Returns the number of open rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if no rooms are open.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Draws codes from the alphabet until one doesn't collide with an
    /// open room.
    fn generate_code(&self) -> RoomCode {
        let mut rng = rand::rng();
        loop {
            let raw: String = (0..CODE_LEN)
                .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
                .collect();
            let code = RoomCode::new(raw);
            if !self.rooms.contains_key(&code) {
                return code;
            }
        }
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
