//! Room registry for Matchpoint.
//!
//! A room is a matchmaking slot pairing exactly one host and up to one
//! guest connection, identified by a short server-generated code. This
//! crate owns that state:
//!
//! - [`Room`] — one open room and its membership
//! - [`RoomRegistry`] — the map from code to room: create, join, list,
//!   remove
//! - [`RoomError`] — the typed join failures
//!
//! The registry is single-writer by design: the server wraps it in one
//! mutex, and every check-then-act sequence (two clients racing to join
//! the same room) completes under one lock acquisition.

mod error;
mod registry;
mod room;

pub use error::RoomError;
pub use registry::RoomRegistry;
pub use room::{Room, RoomVisibility};
