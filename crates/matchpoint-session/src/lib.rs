//! Session tracking for Matchpoint.
//!
//! A session is the server's record of one live client connection: whether
//! it is still in the lobby or attached to a room, which role it holds
//! there, and the channel used to push messages to it.
//!
//! # How it fits in the stack
//!
//! ```text
//! Server dispatcher (above)  ← attaches sessions to rooms, pushes messages
//!     ↕
//! Session layer (this crate) ← the open-connection set and lobby filter
//!     ↕
//! Protocol / Transport (below) ← ServerMessage, ConnectionId
//! ```
//!
//! There is no authentication and no reconnection: identity is "whoever
//! holds the live connection", and a session dies with its socket.

mod manager;
mod session;

pub use manager::SessionManager;
pub use session::{Attachment, PeerRole, PeerSender, Session};
