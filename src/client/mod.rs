//! Client connection handling
//!
//! One handler per accepted connection: read the registration line,
//! update the registry, reply with the peer snapshot, close.

pub mod handler;

pub use handler::handle_connection;
