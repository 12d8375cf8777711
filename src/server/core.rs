//! Accept loop and server lifecycle

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

use crate::client::handle_connection;
use crate::registry::PeerRegistry;
use crate::server::config::ServerConfig;

/// The rendezvous server: a bound listener plus the shared peer registry.
///
/// The registry is injected rather than constructed here, so tests can
/// inspect it independently of the sockets.
pub struct Server {
    listener: TcpListener,
    registry: Arc<PeerRegistry>,
    config: Arc<ServerConfig>,
}

impl Server {
    /// Bind the listening socket. A bind failure is fatal to startup and
    /// is returned to the caller rather than retried.
    pub async fn bind(config: ServerConfig, registry: Arc<PeerRegistry>) -> io::Result<Self> {
        let addr = config.bind_addr();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            error!("Failed to bind to {}: {}", addr, e);
            e
        })?;
        info!("Rendezvous server listening on {}", addr);

        Ok(Self {
            listener,
            registry,
            config: Arc::new(config),
        })
    }

    /// Address the listener actually bound, useful when port 0 was
    /// requested.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve forever. Each accepted connection gets its own task so the
    /// accept loop is never blocked by a slow or silent client; handler
    /// tasks are never awaited and have no count limit. Process
    /// termination is the only stop condition.
    pub async fn start(&self) {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    info!("Accepted connection from {}", addr);
                    let registry = Arc::clone(&self.registry);
                    let config = Arc::clone(&self.config);
                    tokio::spawn(async move {
                        handle_connection(stream, addr, registry, config).await;
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}
