//! Transaction commands
//!
//! Commands issued between `multi` and `exec` are answered with `QUEUED`,
//! so queue them with [`Client::raw`] or a `String` result type.

use crate::client::Client;
use crate::error::Result;
use crate::network::Transport;
use crate::protocol::Command;

impl<T: Transport> Client<T> {
    /// Start a transaction block.
    pub fn multi(&mut self) -> Result<String> {
        self.command(Command::new("MULTI"))
    }

    /// Run all queued commands; each result is rendered as text.
    pub fn exec(&mut self) -> Result<Vec<String>> {
        self.command(Command::new("EXEC"))
    }

    /// Drop all queued commands.
    pub fn discard(&mut self) -> Result<String> {
        self.command(Command::new("DISCARD"))
    }

    /// Make the next transaction conditional on `keys` staying unchanged.
    pub fn watch(&mut self, keys: &[&str]) -> Result<String> {
        self.command(Command::new("WATCH").args(keys.iter().copied()))
    }

    pub fn unwatch(&mut self) -> Result<String> {
        self.command(Command::new("UNWATCH"))
    }
}
