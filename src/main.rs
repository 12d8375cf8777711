//! Rendezvous Server - Entry Point
//!
//! A minimal NAT-traversal rendezvous server: clients register an id and
//! listening port over TCP and receive the endpoints of all other
//! registered peers.

use std::process;
use std::sync::Arc;

use log::{error, info};

use rendezvous_server::registry::PeerRegistry;
use rendezvous_server::server::{Server, ServerConfig};

#[tokio::main]
async fn main() {
    // env_logger picks up the RUST_LOG environment variable
    env_logger::init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    info!("Launching rendezvous server...");

    let registry = Arc::new(PeerRegistry::new());
    let server = match Server::bind(config, registry).await {
        Ok(server) => server,
        Err(e) => {
            error!("Server startup failed: {}", e);
            process::exit(1);
        }
    };

    server.start().await;
}
