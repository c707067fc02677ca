//! Set commands

use crate::client::Client;
use crate::error::Result;
use crate::network::Transport;
use crate::protocol::{Command, CommandArgument};

impl<T: Transport> Client<T> {
    /// Add members; returns how many were not already present.
    pub fn sadd<I>(&mut self, key: &str, members: I) -> Result<i64>
    where
        I: IntoIterator,
        I::Item: Into<CommandArgument>,
    {
        self.command(Command::new("SADD").arg(key).args(members))
    }

    pub fn scard(&mut self, key: &str) -> Result<i64> {
        self.command(Command::new("SCARD").arg(key))
    }

    /// Members of the first set missing from all the others.
    pub fn sdiff(&mut self, keys: &[&str]) -> Result<Vec<String>> {
        self.command(Command::new("SDIFF").args(keys.iter().copied()))
    }

    pub fn sinter(&mut self, keys: &[&str]) -> Result<Vec<String>> {
        self.command(Command::new("SINTER").args(keys.iter().copied()))
    }

    pub fn sismember(&mut self, key: &str, member: impl Into<CommandArgument>) -> Result<bool> {
        self.command(Command::new("SISMEMBER").arg(key).arg(member))
    }

    pub fn smembers(&mut self, key: &str) -> Result<Vec<String>> {
        self.command(Command::new("SMEMBERS").arg(key))
    }

    /// Move a member between sets; false if it was not in `source`.
    pub fn smove(
        &mut self,
        source: &str,
        destination: &str,
        member: impl Into<CommandArgument>,
    ) -> Result<bool> {
        self.command(
            Command::new("SMOVE")
                .arg(source)
                .arg(destination)
                .arg(member),
        )
    }

    /// Remove and return a random member; empty if the set is empty.
    pub fn spop(&mut self, key: &str) -> Result<String> {
        self.command(Command::new("SPOP").arg(key))
    }

    pub fn srandmember(&mut self, key: &str) -> Result<String> {
        self.command(Command::new("SRANDMEMBER").arg(key))
    }

    pub fn srem<I>(&mut self, key: &str, members: I) -> Result<i64>
    where
        I: IntoIterator,
        I::Item: Into<CommandArgument>,
    {
        self.command(Command::new("SREM").arg(key).args(members))
    }

    pub fn sunion(&mut self, keys: &[&str]) -> Result<Vec<String>> {
        self.command(Command::new("SUNION").args(keys.iter().copied()))
    }
}
