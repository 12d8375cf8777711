//! Error handling
//!
//! Defines error types for the rendezvous server.

pub mod types;

pub use types::*;
