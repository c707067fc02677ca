//! Transport abstraction
//!
//! The client only needs something that sends one encoded command and
//! returns one parsed reply tree.

use bytes::Bytes;

use crate::error::Result;
use crate::protocol::Reply;

/// One request/response channel to a server
///
/// Implementations carry at most one in-flight command; callers sharing a
/// transport across threads must serialize access themselves.
pub trait Transport {
    /// Send one encoded command and read its complete reply tree
    ///
    /// Error replies are returned as `Ok(Reply::Error(..))`; `Err` is
    /// reserved for connection and transport failures.
    fn send_command(&mut self, frame: &[Bytes]) -> Result<Reply>;

    /// Release the connection. Calling it more than once is a no-op.
    fn close(&mut self);

    fn is_connected(&self) -> bool;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_command(&mut self, frame: &[Bytes]) -> Result<Reply> {
        (**self).send_command(frame)
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}
