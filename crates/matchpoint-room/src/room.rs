//! Room state: one open matchmaking slot.

use matchpoint_protocol::{RoomCode, RoomSummary};
use matchpoint_transport::ConnectionId;

// ---------------------------------------------------------------------------
// RoomVisibility
// ---------------------------------------------------------------------------

/// Whether a room shows up in the public listing.
///
/// Private rooms are joinable only by knowing the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomVisibility {
    Public,
    Private,
}

impl RoomVisibility {
    /// Maps the wire-level `isPublic` flag onto a visibility.
    pub fn from_public_flag(is_public: bool) -> Self {
        if is_public { Self::Public } else { Self::Private }
    }

    /// Returns `true` for [`RoomVisibility::Public`].
    pub fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// One open room.
///
/// Invariant: at most one host and at most one guest. The room is deleted
/// the instant either member disconnects — it never exists with zero
/// members, and a guest slot never frees up again.
#[derive(Debug, Clone)]
pub struct Room {
    /// Server-generated code, unique among open rooms.
    pub code: RoomCode,

    /// Human-readable label supplied by the creator.
    pub display_name: String,

    /// Whether the room is listed publicly.
    pub visibility: RoomVisibility,

    /// Optional shared secret a joiner must match. Normalized: never an
    /// empty string.
    pub access_secret: Option<String>,

    /// The connection that created the room. Present for the room's whole
    /// lifetime.
    pub host: ConnectionId,

    /// The connection that joined, if any.
    pub guest: Option<ConnectionId>,
}

impl Room {
    /// Returns `true` while the guest slot is empty.
    pub fn is_joinable(&self) -> bool {
        self.guest.is_none()
    }

    /// Returns `true` if joining requires a secret.
    pub fn has_secret(&self) -> bool {
        self.access_secret.is_some()
    }

    /// Checks a supplied secret against the room's. Rooms without a
    /// secret accept anything; rooms with one require an exact match.
    pub fn secret_matches(&self, supplied: Option<&str>) -> bool {
        match &self.access_secret {
            None => true,
            Some(secret) => supplied == Some(secret.as_str()),
        }
    }

    /// Returns the other member of the room, given one member's id.
    ///
    /// `None` if `id` is not a member, or if it is the host and no guest
    /// has joined yet.
    pub fn counterpart(&self, id: ConnectionId) -> Option<ConnectionId> {
        if id == self.host {
            self.guest
        } else if self.guest == Some(id) {
            Some(self.host)
        } else {
            None
        }
    }

    /// Builds the listing entry for this room.
    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            code: self.code.clone(),
            name: self.display_name.clone(),
            has_password: self.has_secret(),
        }
    }
}
