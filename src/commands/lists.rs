//! List commands

use std::str::FromStr;

use crate::client::Client;
use crate::error::{ClientError, Result};
use crate::network::Transport;
use crate::protocol::{Command, CommandArgument};

/// Where LINSERT places the new element relative to the pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Before,
    After,
}

impl InsertPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertPosition::Before => "BEFORE",
            InsertPosition::After => "AFTER",
        }
    }
}

impl FromStr for InsertPosition {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("BEFORE") {
            Ok(InsertPosition::Before)
        } else if s.eq_ignore_ascii_case("AFTER") {
            Ok(InsertPosition::After)
        } else {
            Err(ClientError::InvalidArgument(format!(
                "insert position must be BEFORE or AFTER, got {:?}",
                s
            )))
        }
    }
}

impl<T: Transport> Client<T> {
    /// Blocking pop from the head of the first non-empty list.
    ///
    /// Returns `[key, element]`, or an empty vector when `timeout_secs`
    /// elapses (0 blocks forever).
    pub fn blpop(&mut self, keys: &[&str], timeout_secs: u64) -> Result<Vec<String>> {
        self.command(
            Command::new("BLPOP")
                .args(keys.iter().copied())
                .arg(timeout_secs),
        )
    }

    /// Blocking pop from the tail of the first non-empty list.
    pub fn brpop(&mut self, keys: &[&str], timeout_secs: u64) -> Result<Vec<String>> {
        self.command(
            Command::new("BRPOP")
                .args(keys.iter().copied())
                .arg(timeout_secs),
        )
    }

    /// Blocking variant of `rpoplpush`; empty on timeout.
    pub fn brpoplpush(
        &mut self,
        source: &str,
        destination: &str,
        timeout_secs: u64,
    ) -> Result<String> {
        self.command(
            Command::new("BRPOPLPUSH")
                .arg(source)
                .arg(destination)
                .arg(timeout_secs),
        )
    }

    /// Element at `index`; negative indexes count from the tail.
    pub fn lindex(&mut self, key: &str, index: i64) -> Result<String> {
        self.command(Command::new("LINDEX").arg(key).arg(index))
    }

    /// Insert `value` before or after `pivot`.
    ///
    /// `position` is `"BEFORE"` or `"AFTER"`, in any case. Returns the new
    /// length, or -1 when the pivot was not found.
    pub fn linsert(
        &mut self,
        key: &str,
        position: &str,
        pivot: impl Into<CommandArgument>,
        value: impl Into<CommandArgument>,
    ) -> Result<i64> {
        let position: InsertPosition = position.parse()?;
        self.command(
            Command::new("LINSERT")
                .arg(key)
                .arg(position.as_str())
                .arg(pivot)
                .arg(value),
        )
    }

    pub fn llen(&mut self, key: &str) -> Result<i64> {
        self.command(Command::new("LLEN").arg(key))
    }

    /// Remove and return the first element; empty if the list is empty.
    pub fn lpop(&mut self, key: &str) -> Result<String> {
        self.command(Command::new("LPOP").arg(key))
    }

    /// Prepend values; returns the new length.
    pub fn lpush<I>(&mut self, key: &str, values: I) -> Result<i64>
    where
        I: IntoIterator,
        I::Item: Into<CommandArgument>,
    {
        self.command(Command::new("LPUSH").arg(key).args(values))
    }

    /// Prepend only if the list already exists.
    pub fn lpushx(&mut self, key: &str, value: impl Into<CommandArgument>) -> Result<i64> {
        self.command(Command::new("LPUSHX").arg(key).arg(value))
    }

    /// Elements between inclusive indexes `start` and `stop`.
    pub fn lrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        self.command(Command::new("LRANGE").arg(key).arg(start).arg(stop))
    }

    /// Remove up to `count` occurrences of `value` (all if 0, from the tail if negative).
    pub fn lrem(&mut self, key: &str, count: i64, value: impl Into<CommandArgument>) -> Result<i64> {
        self.command(Command::new("LREM").arg(key).arg(count).arg(value))
    }

    pub fn lset(&mut self, key: &str, index: i64, value: impl Into<CommandArgument>) -> Result<String> {
        self.command(Command::new("LSET").arg(key).arg(index).arg(value))
    }

    /// Keep only the elements between `start` and `stop`.
    pub fn ltrim(&mut self, key: &str, start: i64, stop: i64) -> Result<String> {
        self.command(Command::new("LTRIM").arg(key).arg(start).arg(stop))
    }

    /// Remove and return the last element; empty if the list is empty.
    pub fn rpop(&mut self, key: &str) -> Result<String> {
        self.command(Command::new("RPOP").arg(key))
    }

    /// Move the last element of `source` to the head of `destination`.
    pub fn rpoplpush(&mut self, source: &str, destination: &str) -> Result<String> {
        self.command(Command::new("RPOPLPUSH").arg(source).arg(destination))
    }

    /// Append values; returns the new length.
    pub fn rpush<I>(&mut self, key: &str, values: I) -> Result<i64>
    where
        I: IntoIterator,
        I::Item: Into<CommandArgument>,
    {
        self.command(Command::new("RPUSH").arg(key).args(values))
    }

    pub fn rpushx(&mut self, key: &str, value: impl Into<CommandArgument>) -> Result<i64> {
        self.command(Command::new("RPUSHX").arg(key).arg(value))
    }
}
