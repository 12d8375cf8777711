//! Rendezvous wire protocol
//!
//! Plain text, newline-delimited, one request/response cycle per TCP
//! connection. Handles request parsing and response formatting.

pub mod parser;
pub mod responses;

pub use parser::{Registration, parse_registration};
pub use responses::peer_line;
