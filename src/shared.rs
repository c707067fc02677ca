//! Shared client
//!
//! A cloneable handle that lets several threads use one connection.
//!
//! ## Thread Safety
//! - The client sits behind a `parking_lot::Mutex`
//! - Each call holds the lock for one full encode → round-trip → decode
//!   cycle, so replies can never be read by the wrong caller

use std::sync::Arc;

use parking_lot::Mutex;

use crate::client::Client;
use crate::decode::FromReply;
use crate::error::Result;
use crate::network::{Connection, Transport};
use crate::protocol::Command;

/// Cloneable, thread-safe handle to one client
pub struct SharedClient<T: Transport = Connection> {
    inner: Arc<Mutex<Client<T>>>,
}

impl<T: Transport> SharedClient<T> {
    pub fn new(client: Client<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(client)),
        }
    }

    /// Run a typed command
    pub fn command<R: FromReply>(&self, command: Command) -> Result<R> {
        self.inner.lock().command(command)
    }

    /// Run several commands without other callers interleaving
    ///
    /// ```no_run
    /// use kvclient::{Client, SharedClient};
    /// use std::time::Duration;
    ///
    /// let shared = SharedClient::new(Client::connect("127.0.0.1", 6379, Duration::from_secs(1))?);
    /// let queued = shared.with(|client| {
    ///     client.multi()?;
    ///     client.incr("hits")?;
    ///     client.exec()
    /// })?;
    /// # Ok::<(), kvclient::ClientError>(())
    /// ```
    pub fn with<R>(&self, f: impl FnOnce(&mut Client<T>) -> Result<R>) -> Result<R> {
        let mut client = self.inner.lock();
        f(&mut client)
    }

    pub fn is_connected(&self) -> bool {
        self.inner.lock().is_connected()
    }

    /// Close the connection for every handle
    pub fn close(&self) {
        self.inner.lock().close();
    }
}

impl<T: Transport> Clone for SharedClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> From<Client<T>> for SharedClient<T> {
    fn from(client: Client<T>) -> Self {
        Self::new(client)
    }
}
