//! # Matchpoint
//!
//! A rendezvous (signaling) server that lets exactly two remote peers find
//! each other and exchange the short handshake they need to open a direct
//! connection between themselves. The server's responsibility ends at
//! introduction and relay: handshake payloads pass through it verbatim and
//! are never interpreted.
//!
//! A new connection starts in the **lobby**. From there it can list public
//! rooms, create a room (becoming its host), or join one by code (becoming
//! its guest). Once a room is paired the server relays `offer` / `answer` /
//! `ice_candidate` messages between the two members until either one
//! disconnects — at which point the survivor gets `opponent_left`, the room
//! is deleted, and the lobby list is republished.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use matchpoint::MatchpointServer;
//!
//! # async fn run() -> Result<(), matchpoint::MatchpointError> {
//! let server = MatchpointServer::builder()
//!     .bind("0.0.0.0:3000")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod config;
mod error;
mod handler;
mod lobby;
mod server;

pub use config::ServerConfig;
pub use error::MatchpointError;
pub use server::{MatchpointServer, MatchpointServerBuilder};
