//! Lobby broadcaster: pushes the public room list to unpaired connections.

use matchpoint_protocol::ServerMessage;
use matchpoint_room::RoomRegistry;
use matchpoint_session::SessionManager;

/// Recomputes the public listing and sends it to every open connection
/// still in the lobby.
///
/// Called with both state locks held, after any change to a room's
/// joinability: creation, destruction, or a guest filling the slot.
/// Connections attached to a room are filtered out by the session layer
/// and never receive lobby updates.
pub(crate) fn publish(registry: &RoomRegistry, sessions: &SessionManager) {
    let rooms = registry.list_public();
    let mut recipients = 0usize;
    for session in sessions.lobby_sessions() {
        session.push(ServerMessage::RoomsList {
            rooms: rooms.clone(),
        });
        recipients += 1;
    }
    tracing::debug!(rooms = rooms.len(), recipients, "lobby list published");
}
