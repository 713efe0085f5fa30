//! `MatchpointServer` builder and accept loop.
//!
//! Ties the layers together: transport → protocol → session/room state.
//! Each accepted connection is handed to [`crate::handler::handle_connection`]
//! on its own task; the shared state lives in an `Arc` behind two mutexes.

use std::sync::Arc;

use matchpoint_protocol::{Codec, JsonCodec};
use matchpoint_room::RoomRegistry;
use matchpoint_session::SessionManager;
use matchpoint_transport::{Transport, WebSocketTransport};
use tokio::sync::Mutex;

use crate::MatchpointError;
use crate::handler::handle_connection;

/// Shared server state passed to each connection handler task.
///
/// The registry and the session set are each behind their own mutex; every
/// check-then-act sequence completes under one lock acquisition, which is
/// what makes two racing joins resolve to exactly one winner. Where both
/// locks are needed the order is always registry first, then sessions.
pub(crate) struct ServerState<C: Codec> {
    pub(crate) registry: Mutex<RoomRegistry>,
    pub(crate) sessions: Mutex<SessionManager>,
    pub(crate) codec: C,
}

/// Builder for configuring and starting a Matchpoint server.
pub struct MatchpointServerBuilder {
    bind_addr: String,
}

impl MatchpointServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Binds the listener and builds the server with the JSON codec.
    pub async fn build(self) -> Result<MatchpointServer<JsonCodec>, MatchpointError> {
        let transport = WebSocketTransport::bind(&self.bind_addr).await?;

        let state = Arc::new(ServerState {
            registry: Mutex::new(RoomRegistry::new()),
            sessions: Mutex::new(SessionManager::new()),
            codec: JsonCodec,
        });

        Ok(MatchpointServer { transport, state })
    }
}

impl Default for MatchpointServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running Matchpoint signaling server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct MatchpointServer<C: Codec> {
    transport: WebSocketTransport,
    state: Arc<ServerState<C>>,
}

impl MatchpointServer<JsonCodec> {
    /// Creates a new builder.
    pub fn builder() -> MatchpointServerBuilder {
        MatchpointServerBuilder::new()
    }
}

impl<C: Codec> MatchpointServer<C> {
    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }

    /// Runs the server accept loop.
    ///
    /// Accepts incoming connections and spawns a handler task for each.
    /// Runs until the process is terminated; a failed accept is logged and
    /// never brings the loop down.
    pub async fn run(mut self) -> Result<(), MatchpointError> {
        tracing::info!("matchpoint signaling server running");

        loop {
            match self.transport.accept().await {
                Ok(conn) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(handle_connection(conn, state));
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
