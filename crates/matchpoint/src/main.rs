//! Matchpoint server binary.

use matchpoint::{MatchpointError, MatchpointServer, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), MatchpointError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let server = MatchpointServer::builder()
        .bind(&config.bind_addr())
        .build()
        .await?;
    server.run().await
}
