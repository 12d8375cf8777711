//! Error types
//!
//! Domain-specific error types for each part of the rendezvous server.
//! Per-connection errors never propagate past the handler that produced
//! them; the accept loop and other connections are unaffected.

use std::fmt;
use std::io;

/// Errors arising from a client's registration request.
#[derive(Debug, PartialEq)]
pub enum ProtocolError {
    /// The port token was present but is not a base-10 u16.
    BadPort(String),
    /// Wrong token count or a command other than REGISTER.
    MalformedRequest(String),
    /// The connection closed or errored before a full line arrived.
    /// No reply is possible.
    IncompleteRequest,
}

impl ProtocolError {
    /// The single-line reply sent to the offending client, if any.
    ///
    /// `IncompleteRequest` has no reply: there is no longer anyone
    /// to send it to.
    pub fn wire_reply(&self) -> Option<&'static str> {
        match self {
            ProtocolError::BadPort(_) => Some("ERR bad port\n"),
            ProtocolError::MalformedRequest(_) => Some("ERR expected REGISTER <id> <port>\n"),
            ProtocolError::IncompleteRequest => None,
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::BadPort(token) => write!(f, "Bad port: {}", token),
            ProtocolError::MalformedRequest(line) => write!(f, "Malformed request: {}", line),
            ProtocolError::IncompleteRequest => write!(f, "Connection closed before a full request line"),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Everything that can go wrong on a single connection.
#[derive(Debug)]
pub enum ConnectionError {
    Protocol(ProtocolError),
    Io(io::Error),
    /// The configured read deadline elapsed before a full line arrived.
    ReadTimeout,
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::Protocol(e) => write!(f, "Protocol error: {}", e),
            ConnectionError::Io(e) => write!(f, "I/O error: {}", e),
            ConnectionError::ReadTimeout => write!(f, "Read timed out waiting for request line"),
        }
    }
}

impl std::error::Error for ConnectionError {}

impl From<ProtocolError> for ConnectionError {
    fn from(error: ProtocolError) -> Self {
        ConnectionError::Protocol(error)
    }
}

impl From<io::Error> for ConnectionError {
    fn from(error: io::Error) -> Self {
        ConnectionError::Io(error)
    }
}
