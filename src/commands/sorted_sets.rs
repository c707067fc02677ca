//! Sorted set commands
//!
//! Score bounds (`min`/`max`) are passed through as text so exclusive
//! (`(1.5`) and infinite (`-inf`, `+inf`) bounds work.

use crate::client::Client;
use crate::error::Result;
use crate::network::Transport;
use crate::protocol::{Command, CommandArgument};

impl<T: Transport> Client<T> {
    /// Add a member with a score; returns 1 if the member is new.
    pub fn zadd(&mut self, key: &str, score: f64, member: impl Into<CommandArgument>) -> Result<i64> {
        self.command(Command::new("ZADD").arg(key).arg(score).arg(member))
    }

    pub fn zcard(&mut self, key: &str) -> Result<i64> {
        self.command(Command::new("ZCARD").arg(key))
    }

    /// Number of members with a score between `min` and `max`.
    pub fn zcount(&mut self, key: &str, min: &str, max: &str) -> Result<i64> {
        self.command(Command::new("ZCOUNT").arg(key).arg(min).arg(max))
    }

    /// Add `increment` to a member's score; returns the new score.
    pub fn zincrby(
        &mut self,
        key: &str,
        increment: f64,
        member: impl Into<CommandArgument>,
    ) -> Result<f64> {
        self.command(Command::new("ZINCRBY").arg(key).arg(increment).arg(member))
    }

    /// Members by rank, lowest score first.
    pub fn zrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        self.command(Command::new("ZRANGE").arg(key).arg(start).arg(stop))
    }

    pub fn zrangebyscore(&mut self, key: &str, min: &str, max: &str) -> Result<Vec<String>> {
        self.command(Command::new("ZRANGEBYSCORE").arg(key).arg(min).arg(max))
    }

    /// Rank of a member, lowest score first; `None` if it is not in the set.
    pub fn zrank(&mut self, key: &str, member: impl Into<CommandArgument>) -> Result<Option<u64>> {
        self.command(Command::new("ZRANK").arg(key).arg(member))
    }

    pub fn zrem<I>(&mut self, key: &str, members: I) -> Result<i64>
    where
        I: IntoIterator,
        I::Item: Into<CommandArgument>,
    {
        self.command(Command::new("ZREM").arg(key).args(members))
    }

    /// Members by rank, highest score first.
    pub fn zrevrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        self.command(Command::new("ZREVRANGE").arg(key).arg(start).arg(stop))
    }

    /// Score of a member; `None` if it is not in the set.
    pub fn zscore(&mut self, key: &str, member: impl Into<CommandArgument>) -> Result<Option<f64>> {
        self.command(Command::new("ZSCORE").arg(key).arg(member))
    }
}
