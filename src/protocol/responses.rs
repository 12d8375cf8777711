//! Response formatting
//!
//! One `PEER` line per other registered client on success; error replies
//! live on [`ProtocolError::wire_reply`](crate::error::ProtocolError).

use crate::registry::PeerRecord;

/// Format one peer of the snapshot for the wire.
///
/// The trailing field is the peer's id, carried as an opaque token;
/// whether it is reusable for anything beyond display is unspecified.
pub fn peer_line(peer: &PeerRecord) -> String {
    format!("PEER {} {} {}\n", peer.addr, peer.listen_port, peer.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn formats_peer_line() {
        let record = PeerRecord {
            id: "alice".to_string(),
            addr: IpAddr::V4(Ipv4Addr::new(192, 168, 1, 7)),
            listen_port: 5000,
        };
        assert_eq!(peer_line(&record), "PEER 192.168.1.7 5000 alice\n");
    }
}
