pub mod client;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod server;

pub use registry::PeerRegistry;
pub use server::Server;
