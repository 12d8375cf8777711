//! Peer registry
//!
//! Process-wide mapping from client id to its registered endpoint.
//! The registry is owned by whoever constructs it (main or a test) and
//! shared with connection handlers through an `Arc`, so concurrent
//! registration can be exercised without a real network.

use std::collections::HashMap;
use std::net::IpAddr;

use tokio::sync::Mutex;

/// One registered client.
///
/// `addr` is the source IP observed on the registering connection, not a
/// client-supplied value. `listen_port` is client-claimed and unverified.
#[derive(Debug, Clone, PartialEq)]
pub struct PeerRecord {
    pub id: String,
    pub addr: IpAddr,
    pub listen_port: u16,
}

/// Registry of currently-registered peers.
///
/// A single coarse mutex guards the whole map. Entries are never removed;
/// the registry only grows for the life of the process.
pub struct PeerRegistry {
    peers: Mutex<HashMap<String, PeerRecord>>,
}

impl PeerRegistry {
    pub fn new() -> Self {
        Self {
            peers: Mutex::new(HashMap::new()),
        }
    }

    /// Insert (or overwrite, last-writer-wins) a registration and return a
    /// snapshot of every *other* registered peer.
    ///
    /// Insert and snapshot happen under one lock acquisition, so no
    /// concurrent registration can observe a half-applied entry and no
    /// snapshot can miss a registration that was committed before this one
    /// acquired the lock. Snapshot order is unspecified.
    pub async fn register(&self, id: &str, addr: IpAddr, listen_port: u16) -> Vec<PeerRecord> {
        let mut peers = self.peers.lock().await;
        peers.insert(
            id.to_string(),
            PeerRecord {
                id: id.to_string(),
                addr,
                listen_port,
            },
        );
        peers
            .values()
            .filter(|record| record.id != id)
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.peers.lock().await.len()
    }

    pub async fn get(&self, id: &str) -> Option<PeerRecord> {
        self.peers.lock().await.get(id).cloned()
    }
}

impl Default for PeerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
