//! Client
//!
//! Runs one command at a time through the pipeline:
//! encode arguments → transport round-trip → decode reply.
//!
//! Arguments are fully encoded before anything is written, so argument
//! errors never reach the network.

use std::time::Duration;

use crate::config::Config;
use crate::decode::{decode, decode_as, Destination, FromReply, Value};
use crate::error::Result;
use crate::network::{Connection, Transport};
use crate::protocol::{Command, Reply};

/// A client bound to one transport
///
/// Every method takes `&mut self`: a client carries at most one command at a
/// time. Wrap it in a lock to share it between threads.
pub struct Client<T: Transport = Connection> {
    transport: T,
}

impl Client<Connection> {
    /// Connect over TCP; `timeout` bounds connecting, reads and writes
    pub fn connect(host: &str, port: u16, timeout: Duration) -> Result<Self> {
        Ok(Self::with_transport(Connection::connect(host, port, timeout)?))
    }

    /// Connect over TCP using a config
    pub fn open(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(Connection::open(config)?))
    }
}

impl<T: Transport> Client<T> {
    /// Wrap an already established transport
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Close the underlying transport (idempotent)
    pub fn close(&mut self) {
        self.transport.close();
    }

    /// Run a command and decode its reply into `R`
    ///
    /// ```no_run
    /// use kvclient::{Client, Command};
    /// use std::time::Duration;
    ///
    /// let mut client = Client::connect("127.0.0.1", 6379, Duration::from_secs(1))?;
    /// let total: i64 = client.command(Command::new("INCRBY").arg("hits").arg(5i64))?;
    /// # Ok::<(), kvclient::ClientError>(())
    /// ```
    pub fn command<R: FromReply>(&mut self, command: Command) -> Result<R> {
        let reply = self.round_trip(&command)?;
        decode_as(reply)
    }

    /// Run a command and decode its reply into a runtime-chosen shape
    pub fn command_as(&mut self, command: Command, destination: &Destination) -> Result<Value> {
        let reply = self.round_trip(&command)?;
        decode(reply, destination)
    }

    /// Run a command and return the reply tree undecoded
    ///
    /// Error replies come back as `Reply::Error`, not as `Err`.
    pub fn raw(&mut self, command: Command) -> Result<Reply> {
        self.round_trip(&command)
    }

    fn round_trip(&mut self, command: &Command) -> Result<Reply> {
        let frame = command.encode()?;

        tracing::trace!("Sending {} with {} arguments", command.name(), frame.len());
        let reply = self.transport.send_command(&frame)?;

        if let Reply::Error(message) = &reply {
            tracing::debug!("Server rejected {}: {}", command.name(), message);
        }
        Ok(reply)
    }
}
