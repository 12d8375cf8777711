//! Per-connection registration handler

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::error::{ConnectionError, ProtocolError};
use crate::protocol::{parse_registration, peer_line};
use crate::registry::PeerRegistry;
use crate::server::ServerConfig;

/// Handles one rendezvous connection end to end.
///
/// The protocol is a single request/response cycle: one
/// `REGISTER <id> <port>` line in, zero or more `PEER` lines out, then the
/// connection is dropped. Errors are logged here and never propagate to the
/// accept loop or to other connections.
pub async fn handle_connection(
    stream: TcpStream,
    client_addr: SocketAddr,
    registry: Arc<PeerRegistry>,
    config: Arc<ServerConfig>,
) {
    if let Err(e) = serve(stream, client_addr, registry, config).await {
        warn!("Connection from {} failed: {}", client_addr, e);
    }
}

async fn serve(
    stream: TcpStream,
    client_addr: SocketAddr,
    registry: Arc<PeerRegistry>,
    config: Arc<ServerConfig>,
) -> Result<(), ConnectionError> {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();

    // By default there is no read deadline: a silent client parks this task
    // indefinitely, matching the inherited behavior. A configured
    // read_timeout_secs bounds the wait instead.
    let n = match config.read_timeout_secs {
        Some(secs) => timeout(Duration::from_secs(secs), reader.read_line(&mut line))
            .await
            .map_err(|_| ConnectionError::ReadTimeout)??,
        None => reader.read_line(&mut line).await?,
    };

    if n == 0 {
        // EOF before any full line; nothing to reply to.
        return Err(ProtocolError::IncompleteRequest.into());
    }

    let stream = reader.get_mut();

    let registration = match parse_registration(&line) {
        Ok(registration) => registration,
        Err(e) => {
            if let Some(reply) = e.wire_reply() {
                stream.write_all(reply.as_bytes()).await?;
                stream.flush().await?;
            }
            return Err(e.into());
        }
    };

    let peers = registry
        .register(&registration.id, client_addr.ip(), registration.listen_port)
        .await;

    info!(
        "Registered {} from {}:{} ({} other peers)",
        registration.id,
        client_addr.ip(),
        registration.listen_port,
        peers.len()
    );

    for peer in &peers {
        stream.write_all(peer_line(peer).as_bytes()).await?;
    }
    stream.flush().await?;

    Ok(())
}
