//! Network Module
//!
//! Transports that carry encoded commands to the server.
//!
//! ## Architecture
//! - `Transport` trait: one framed command in, one reply tree out
//! - `Connection`: blocking TCP implementation with read/write timeouts
//! - No pooling or reconnection; a failed connection stays closed

mod transport;
mod connection;

pub use transport::Transport;
pub use connection::Connection;
