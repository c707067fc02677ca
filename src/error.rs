//! Error types for kvclient
//!
//! Provides a unified error type for every stage of a command: argument
//! encoding, the transport round-trip, and reply decoding.

use thiserror::Error;

use crate::decode::Destination;
use crate::protocol::ReplyKind;

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;

/// Unified error type for kvclient operations
#[derive(Debug, Error)]
pub enum ClientError {
    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("connection error: {0}")]
    Connection(String),

    #[error("not connected")]
    NotConnected,

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error("protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Server Errors
    // -------------------------------------------------------------------------
    #[error("server error: {0}")]
    Server(String),

    // -------------------------------------------------------------------------
    // Argument Errors
    // -------------------------------------------------------------------------
    #[error("unsupported argument type: {0}")]
    UnsupportedArgumentType(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Decoding Errors
    // -------------------------------------------------------------------------
    #[error("unsupported coercion: cannot decode {from} reply into {to}")]
    UnsupportedCoercion { from: ReplyKind, to: Destination },

    #[error("malformed numeric reply: {text:?} is not a valid {to}")]
    MalformedNumericReply { text: String, to: Destination },

    #[error("integer {value} is out of range for {to}")]
    IntegerOutOfRange { value: String, to: Destination },

    #[error("reply is not valid UTF-8 and cannot be decoded into {to}")]
    InvalidUtf8 { to: Destination },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns true if this is a transport read/write timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            ClientError::Transport(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            ),
            _ => false,
        }
    }

    /// Returns true if the server answered with an error reply.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ClientError::Server(_))
    }

    /// Returns true if the error was raised before anything reached the network.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            ClientError::UnsupportedArgumentType(_) | ClientError::InvalidArgument(_)
        )
    }
}
