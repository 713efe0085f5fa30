//! Per-connection handler: decode, dispatch, relay, disconnect cleanup.
//!
//! Each accepted connection gets its own Tokio task running
//! [`handle_connection`], plus a small pump task that encodes queued
//! [`ServerMessage`]s and hands them to the transport. The flow is:
//!
//!   1. Register a session (the connection starts in the lobby)
//!   2. Loop: receive frames → decode once → dispatch on the variant
//!   3. On close (from any state): notify the room counterpart, release
//!      the room, republish the lobby list
//!
//! Every per-message failure is handled here — converted to a reply or
//! dropped with a debug log. Nothing propagates out to kill the dispatcher
//! or another client's session.

use std::sync::Arc;

use matchpoint_protocol::{ClientMessage, Codec, RoomCode, ServerMessage};
use matchpoint_room::{RoomError, RoomVisibility};
use matchpoint_session::PeerRole;
use matchpoint_transport::{Connection, ConnectionId, WebSocketConnection};
use tokio::sync::mpsc;

use crate::lobby;
use crate::server::ServerState;

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection<C: Codec>(
    conn: WebSocketConnection,
    state: Arc<ServerState<C>>,
) {
    let conn_id = conn.id();
    tracing::info!(%conn_id, "client connected");

    // Register the session and start the outbound pump. The session holds
    // the only sender; removing it on disconnect closes the channel, and
    // the pump drains whatever is still queued and exits.
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();
    state.sessions.lock().await.register(conn_id, tx);

    let pump_conn = conn.clone();
    let pump_state = Arc::clone(&state);
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let bytes = match pump_state.codec.encode(&msg) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::debug!(%conn_id, error = %e, "failed to encode outbound message");
                    continue;
                }
            };
            if pump_conn.send(&bytes).is_err() {
                break;
            }
        }
    });

    loop {
        match conn.recv().await {
            Ok(Some(data)) => dispatch(&state, conn_id, &data).await,
            Ok(None) => {
                tracing::info!(%conn_id, "client disconnected");
                break;
            }
            Err(e) => {
                tracing::debug!(%conn_id, error = %e, "receive error");
                break;
            }
        }
    }

    handle_disconnect(&state, conn_id).await;
}

/// Decodes one inbound frame and routes it by variant.
///
/// A frame that doesn't parse is dropped right here; it never affects the
/// connection or any other client.
async fn dispatch<C: Codec>(state: &ServerState<C>, conn_id: ConnectionId, data: &[u8]) {
    let msg: ClientMessage = match state.codec.decode(data) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::debug!(%conn_id, error = %e, "dropping malformed message");
            return;
        }
    };

    match msg {
        ClientMessage::CreateRoom {
            name,
            is_public,
            password,
        } => create_room(state, conn_id, name, is_public, password).await,
        ClientMessage::JoinRoom {
            room_code,
            password,
        } => join_room(state, conn_id, room_code, password).await,
        ClientMessage::GetRooms => get_rooms(state, conn_id).await,
        ClientMessage::Offer { room_code, sdp } => {
            relay(state, conn_id, &room_code, ServerMessage::Offer { sdp }).await
        }
        ClientMessage::Answer { room_code, sdp } => {
            relay(state, conn_id, &room_code, ServerMessage::Answer { sdp }).await
        }
        ClientMessage::IceCandidate {
            room_code,
            candidate,
        } => {
            relay(
                state,
                conn_id,
                &room_code,
                ServerMessage::IceCandidate { candidate },
            )
            .await
        }
    }
}

/// Opens a room with the requester as host and republishes the lobby.
async fn create_room<C: Codec>(
    state: &ServerState<C>,
    conn_id: ConnectionId,
    name: String,
    is_public: bool,
    password: Option<String>,
) {
    let mut registry = state.registry.lock().await;
    let mut sessions = state.sessions.lock().await;

    let Some(session) = sessions.get(conn_id) else {
        return;
    };
    if !session.in_lobby() {
        session.push(ServerMessage::Error {
            message: "Already in a room.".into(),
        });
        return;
    }

    let code = registry.create_room(
        conn_id,
        name,
        RoomVisibility::from_public_flag(is_public),
        password,
    );
    sessions.attach(conn_id, &code, PeerRole::Host);
    if let Some(session) = sessions.get(conn_id) {
        session.push(ServerMessage::RoomCreated { room_code: code });
    }
    lobby::publish(&registry, &sessions);
}

/// Attaches the requester as guest. On success the *host* is notified and
/// the room disappears from the lobby; on failure only the joiner hears
/// about it and nothing changes.
async fn join_room<C: Codec>(
    state: &ServerState<C>,
    conn_id: ConnectionId,
    room_code: RoomCode,
    password: Option<String>,
) {
    let mut registry = state.registry.lock().await;
    let mut sessions = state.sessions.lock().await;

    let Some(session) = sessions.get(conn_id) else {
        return;
    };
    if !session.in_lobby() {
        session.push(ServerMessage::Error {
            message: "Already in a room.".into(),
        });
        return;
    }

    match registry.join_room(&room_code, conn_id, password.as_deref()) {
        Ok(room) => {
            let host = room.host;
            sessions.attach(conn_id, &room_code, PeerRole::Guest);
            // No direct reply to the joiner: the host's notification is
            // the signal for both sides to start the handshake.
            if let Some(host_session) = sessions.get(host) {
                host_session.push(ServerMessage::RoomJoined);
            }
            lobby::publish(&registry, &sessions);
        }
        Err(e) => {
            tracing::debug!(%conn_id, %room_code, error = %e, "join rejected");
            if let Some(session) = sessions.get(conn_id) {
                session.push(join_failure_reply(&e));
            }
        }
    }
}

/// Maps a registry failure onto the reply the joiner sees.
fn join_failure_reply(err: &RoomError) -> ServerMessage {
    match err {
        RoomError::NotFound(_) => ServerMessage::RoomNotFound {
            message: "Room not found.".into(),
        },
        RoomError::RoomFull(_) => ServerMessage::Error {
            message: "Room is full.".into(),
        },
        RoomError::AccessDenied(_) => ServerMessage::WrongPassword {
            message: "Incorrect password.".into(),
        },
    }
}

/// Answers a `get_rooms` request with the current public listing.
async fn get_rooms<C: Codec>(state: &ServerState<C>, conn_id: ConnectionId) {
    let registry = state.registry.lock().await;
    let sessions = state.sessions.lock().await;

    if let Some(session) = sessions.get(conn_id) {
        session.push(ServerMessage::RoomsList {
            rooms: registry.list_public(),
        });
    }
}

/// Store-and-forward relay: pushes the message to the sender's room
/// counterpart. Any gap — unknown room, sender not a member, no
/// counterpart yet, counterpart already gone — drops the message silently;
/// the sender learns about a departed peer via `opponent_left` instead.
async fn relay<C: Codec>(
    state: &ServerState<C>,
    conn_id: ConnectionId,
    room_code: &RoomCode,
    outbound: ServerMessage,
) {
    let registry = state.registry.lock().await;
    let sessions = state.sessions.lock().await;

    let Some(target) = registry
        .get(room_code)
        .and_then(|room| room.counterpart(conn_id))
    else {
        tracing::debug!(%conn_id, %room_code, "dropping relay message with no destination");
        return;
    };
    if let Some(target_session) = sessions.get(target) {
        target_session.push(outbound);
    }
}

/// Runs once when a connection's read loop ends, from any state.
///
/// Policy: the room ends the moment either party leaves. The counterpart
/// (if still connected) gets `opponent_left` but keeps its attachment — a
/// connection that has been paired never returns to the lobby.
async fn handle_disconnect<C: Codec>(state: &ServerState<C>, conn_id: ConnectionId) {
    let mut registry = state.registry.lock().await;
    let mut sessions = state.sessions.lock().await;

    let Some(session) = sessions.remove(conn_id) else {
        return;
    };
    let Some(attachment) = session.attachment else {
        return;
    };

    // Already gone if the counterpart disconnected first.
    let Some(room) = registry.remove(&attachment.room) else {
        return;
    };

    if let Some(counterpart) = room.counterpart(conn_id) {
        if let Some(peer) = sessions.get(counterpart) {
            peer.push(ServerMessage::OpponentLeft);
        }
    }
    lobby::publish(&registry, &sessions);
}

// =========================================================================
// Tests
// =========================================================================
