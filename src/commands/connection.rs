//! Connection commands

use crate::client::Client;
use crate::error::Result;
use crate::network::Transport;
use crate::protocol::{Command, CommandArgument};

impl<T: Transport> Client<T> {
    /// Authenticate to a password-protected server.
    pub fn auth(&mut self, password: &str) -> Result<String> {
        self.command(Command::new("AUTH").arg(password))
    }

    /// Return `message` unchanged.
    pub fn echo(&mut self, message: impl Into<CommandArgument>) -> Result<String> {
        self.command(Command::new("ECHO").arg(message))
    }

    /// Check the connection; the server answers `PONG`.
    pub fn ping(&mut self) -> Result<String> {
        self.command(Command::new("PING"))
    }

    /// Switch to the logical database `index`.
    pub fn select(&mut self, index: u32) -> Result<String> {
        self.command(Command::new("SELECT").arg(index))
    }
}
