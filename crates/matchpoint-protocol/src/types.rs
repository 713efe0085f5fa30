//! Core protocol types for Matchpoint's wire format.
//!
//! Every message on the wire is a flat JSON object discriminated by its
//! `"type"` field, e.g. `{"type":"join_room","roomCode":"AB12C"}`. The
//! enums below decode that envelope once at the boundary so the dispatcher
//! matches exhaustively over variants instead of comparing strings.
//!
//! Field names are camelCase on the wire (`roomCode`, `isPublic`,
//! `hasPassword`) to match the deployed client; type tags are snake_case.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A short opaque identifier for a room.
///
/// Codes are server-generated (never client-supplied at creation) and
/// unique among currently-open rooms. Serializes as a plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    /// Wraps a raw code string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Room listing
// ---------------------------------------------------------------------------

/// A summary of one joinable room, as returned in `rooms_list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    /// The room's code, used to join it.
    pub code: RoomCode,
    /// Human-readable label supplied by the creator.
    pub name: String,
    /// Whether joining requires a password.
    pub has_password: bool,
}

// ---------------------------------------------------------------------------
// ClientMessage — everything a client may send
// ---------------------------------------------------------------------------

/// Messages sent from a client to the server.
///
/// The control messages (`create_room`, `join_room`, `get_rooms`) drive the
/// room lifecycle. The relay messages (`offer`, `answer`, `ice_candidate`)
/// carry the peers' own connection handshake; their `sdp`/`candidate`
/// payloads are opaque to the server and forwarded verbatim to the room
/// counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ClientMessage {
    /// Open a new room. The server allocates the code and replies with
    /// `room_created`.
    CreateRoom {
        name: String,
        #[serde(default)]
        is_public: bool,
        #[serde(default)]
        password: Option<String>,
    },

    /// Join an existing room by code. On success the *host* is notified
    /// with `room_joined`; the joiner proceeds straight to the handshake.
    JoinRoom {
        room_code: RoomCode,
        #[serde(default)]
        password: Option<String>,
    },

    /// Request the current list of public, joinable rooms.
    GetRooms,

    /// Handshake offer, relayed to the room counterpart.
    Offer {
        room_code: RoomCode,
        sdp: serde_json::Value,
    },

    /// Handshake answer, relayed to the room counterpart.
    Answer {
        room_code: RoomCode,
        sdp: serde_json::Value,
    },

    /// Connectivity candidate, relayed to the room counterpart.
    IceCandidate {
        room_code: RoomCode,
        candidate: serde_json::Value,
    },
}

// ---------------------------------------------------------------------------
// ServerMessage — everything the server may send
// ---------------------------------------------------------------------------

/// Messages sent from the server to a client.
///
/// Relayed handshake messages are re-emitted without the `roomCode` field:
/// the recipient is already in the room the message belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ServerMessage {
    /// Reply to `create_room`: the room is open under this code.
    RoomCreated { room_code: RoomCode },

    /// Sent to the host when a guest joins its room.
    RoomJoined,

    /// The current list of public joinable rooms. Sent in reply to
    /// `get_rooms`, and pushed unsolicited to lobby connections whenever
    /// a room's joinability changes.
    RoomsList { rooms: Vec<RoomSummary> },

    /// Reply to `join_room` with an unknown code.
    RoomNotFound { message: String },

    /// Reply to `join_room` with a wrong password.
    WrongPassword { message: String },

    /// Generic request failure (e.g. the room is already full).
    Error { message: String },

    /// Relayed handshake offer.
    Offer { sdp: serde_json::Value },

    /// Relayed handshake answer.
    Answer { sdp: serde_json::Value },

    /// Relayed connectivity candidate.
    IceCandidate { candidate: serde_json::Value },

    /// Sent to the remaining member of a room when the other one
    /// disconnects.
    OpponentLeft,
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! The wire format is fixed by the deployed client: exact type tags,
    //! camelCase field names, flat objects. These tests pin that shape —
    //! a serde attribute change that passes a round-trip can still break
    //! real clients, so most tests assert concrete JSON.

    use super::*;
    use serde_json::json;

    fn decode(input: &str) -> ClientMessage {
        serde_json::from_str(input).expect("should decode")
    }

    // =====================================================================
    // RoomCode
    // =====================================================================

    #[test]
    fn test_room_code_serializes_as_plain_string() {
        let json = serde_json::to_string(&RoomCode::new("AB12C")).unwrap();
        assert_eq!(json, "\"AB12C\"");
    }

    #[test]
    fn test_room_code_display() {
        assert_eq!(RoomCode::new("XY99Z").to_string(), "XY99Z");
    }

    // =====================================================================
    // ClientMessage decoding — exact wire shapes
    // =====================================================================

    #[test]
    fn test_decode_create_room_full() {
        let msg = decode(
            r#"{"type":"create_room","name":"Arena","isPublic":true,"password":"hunter2"}"#,
        );
        assert_eq!(
            msg,
            ClientMessage::CreateRoom {
                name: "Arena".into(),
                is_public: true,
                password: Some("hunter2".into()),
            }
        );
    }

    #[test]
    fn test_decode_create_room_defaults_private_and_open() {
        // Clients omit `isPublic` and `password` for a plain private room.
        let msg = decode(r#"{"type":"create_room","name":"Arena"}"#);
        assert_eq!(
            msg,
            ClientMessage::CreateRoom {
                name: "Arena".into(),
                is_public: false,
                password: None,
            }
        );
    }

    #[test]
    fn test_decode_create_room_null_password() {
        let msg = decode(r#"{"type":"create_room","name":"Arena","password":null}"#);
        assert_eq!(
            msg,
            ClientMessage::CreateRoom {
                name: "Arena".into(),
                is_public: false,
                password: None,
            }
        );
    }

    #[test]
    fn test_decode_join_room() {
        let msg = decode(r#"{"type":"join_room","roomCode":"AB12C"}"#);
        assert_eq!(
            msg,
            ClientMessage::JoinRoom {
                room_code: RoomCode::new("AB12C"),
                password: None,
            }
        );
    }

    #[test]
    fn test_decode_join_room_with_password() {
        let msg = decode(r#"{"type":"join_room","roomCode":"AB12C","password":"secret"}"#);
        assert_eq!(
            msg,
            ClientMessage::JoinRoom {
                room_code: RoomCode::new("AB12C"),
                password: Some("secret".into()),
            }
        );
    }

    #[test]
    fn test_decode_get_rooms() {
        let msg = decode(r#"{"type":"get_rooms"}"#);
        assert_eq!(msg, ClientMessage::GetRooms);
    }

    #[test]
    fn test_decode_offer_keeps_sdp_opaque() {
        // The sdp payload is whatever the peer's stack produced — here a
        // session-description object. It must survive untouched.
        let msg = decode(
            r#"{"type":"offer","roomCode":"AB12C","sdp":{"type":"offer","sdp":"v=0\r\n"}}"#,
        );
        match msg {
            ClientMessage::Offer { room_code, sdp } => {
                assert_eq!(room_code, RoomCode::new("AB12C"));
                assert_eq!(sdp, json!({"type": "offer", "sdp": "v=0\r\n"}));
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_decode_ice_candidate() {
        let msg = decode(
            r#"{"type":"ice_candidate","roomCode":"AB12C","candidate":{"candidate":"candidate:1 1 UDP 123 10.0.0.1 5000 typ host","sdpMid":"0"}}"#,
        );
        match msg {
            ClientMessage::IceCandidate { candidate, .. } => {
                assert_eq!(candidate["sdpMid"], "0");
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_decode_tolerates_unknown_extra_fields() {
        let msg = decode(r#"{"type":"get_rooms","clientVersion":"2.1"}"#);
        assert_eq!(msg, ClientMessage::GetRooms);
    }

    // =====================================================================
    // ServerMessage encoding — exact wire shapes
    // =====================================================================

    #[test]
    fn test_encode_room_created() {
        let msg = ServerMessage::RoomCreated {
            room_code: RoomCode::new("AB12C"),
        };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, json!({"type": "room_created", "roomCode": "AB12C"}));
    }

    #[test]
    fn test_encode_room_joined() {
        let json: serde_json::Value =
            serde_json::to_value(&ServerMessage::RoomJoined).unwrap();
        assert_eq!(json, json!({"type": "room_joined"}));
    }

    #[test]
    fn test_encode_rooms_list() {
        let msg = ServerMessage::RoomsList {
            rooms: vec![RoomSummary {
                code: RoomCode::new("AB12C"),
                name: "Arena".into(),
                has_password: false,
            }],
        };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "rooms_list",
                "rooms": [{"code": "AB12C", "name": "Arena", "hasPassword": false}]
            })
        );
    }

    #[test]
    fn test_encode_rooms_list_empty() {
        let msg = ServerMessage::RoomsList { rooms: vec![] };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, json!({"type": "rooms_list", "rooms": []}));
    }

    #[test]
    fn test_encode_join_failures() {
        let json: serde_json::Value = serde_json::to_value(&ServerMessage::RoomNotFound {
            message: "Room not found.".into(),
        })
        .unwrap();
        assert_eq!(
            json,
            json!({"type": "room_not_found", "message": "Room not found."})
        );

        let json: serde_json::Value = serde_json::to_value(&ServerMessage::WrongPassword {
            message: "Incorrect password.".into(),
        })
        .unwrap();
        assert_eq!(
            json,
            json!({"type": "wrong_password", "message": "Incorrect password."})
        );

        let json: serde_json::Value = serde_json::to_value(&ServerMessage::Error {
            message: "Room is full.".into(),
        })
        .unwrap();
        assert_eq!(json, json!({"type": "error", "message": "Room is full."}));
    }

    #[test]
    fn test_encode_relayed_offer_has_no_room_code() {
        // The forwarded form is `{type, sdp}` — the recipient's room is
        // implied by its own attachment.
        let msg = ServerMessage::Offer {
            sdp: json!({"type": "offer", "sdp": "X"}),
        };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            json!({"type": "offer", "sdp": {"type": "offer", "sdp": "X"}})
        );
    }

    #[test]
    fn test_encode_opponent_left() {
        let json: serde_json::Value =
            serde_json::to_value(&ServerMessage::OpponentLeft).unwrap();
        assert_eq!(json, json!({"type": "opponent_left"}));
    }

    // =====================================================================
    // Error cases — malformed input
    // =====================================================================

    #[test]
    fn test_decode_garbage_returns_error() {
        let garbage = b"not json at all";
        let result: Result<ClientMessage, _> = serde_json::from_slice(garbage);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_missing_type_returns_error() {
        let result: Result<ClientMessage, _> =
            serde_json::from_str(r#"{"roomCode": "AB12C"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_unknown_type_returns_error() {
        let result: Result<ClientMessage, _> =
            serde_json::from_str(r#"{"type": "fly_to_moon", "speed": 9000}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_join_room_missing_code_returns_error() {
        let result: Result<ClientMessage, _> =
            serde_json::from_str(r#"{"type": "join_room"}"#);
        assert!(result.is_err());
    }
}
