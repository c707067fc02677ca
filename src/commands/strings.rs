//! String commands

use std::str::FromStr;

use super::collect_pairs;
use crate::client::Client;
use crate::error::{ClientError, Result};
use crate::network::Transport;
use crate::protocol::{Command, CommandArgument};

/// Bitwise operation for BITOP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOperation {
    And,
    Or,
    Xor,
    Not,
}

impl BitOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            BitOperation::And => "AND",
            BitOperation::Or => "OR",
            BitOperation::Xor => "XOR",
            BitOperation::Not => "NOT",
        }
    }
}

impl FromStr for BitOperation {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Ok(BitOperation::And),
            "OR" => Ok(BitOperation::Or),
            "XOR" => Ok(BitOperation::Xor),
            "NOT" => Ok(BitOperation::Not),
            _ => Err(ClientError::InvalidArgument(format!(
                "bit operation must be AND, OR, XOR or NOT, got {:?}",
                s
            ))),
        }
    }
}

impl<T: Transport> Client<T> {
    /// Append `value` to the string at `key`; returns the new length.
    pub fn append(&mut self, key: &str, value: impl Into<CommandArgument>) -> Result<i64> {
        self.command(Command::new("APPEND").arg(key).arg(value))
    }

    /// Count set bits, optionally within a byte range.
    pub fn bitcount(&mut self, key: &str, range: Option<(i64, i64)>) -> Result<i64> {
        let mut command = Command::new("BITCOUNT").arg(key);
        if let Some((start, end)) = range {
            command = command.arg(start).arg(end);
        }
        self.command(command)
    }

    /// Combine `keys` bitwise into `destination`; returns the result length.
    pub fn bitop(&mut self, operation: &str, destination: &str, keys: &[&str]) -> Result<i64> {
        let operation: BitOperation = operation.parse()?;
        self.command(
            Command::new("BITOP")
                .arg(operation.as_str())
                .arg(destination)
                .args(keys.iter().copied()),
        )
    }

    pub fn decr(&mut self, key: &str) -> Result<i64> {
        self.command(Command::new("DECR").arg(key))
    }

    pub fn decrby(&mut self, key: &str, decrement: i64) -> Result<i64> {
        self.command(Command::new("DECRBY").arg(key).arg(decrement))
    }

    /// Value at `key`; empty when the key does not exist.
    pub fn get(&mut self, key: &str) -> Result<String> {
        self.command(Command::new("GET").arg(key))
    }

    pub fn getbit(&mut self, key: &str, offset: u64) -> Result<i64> {
        self.command(Command::new("GETBIT").arg(key).arg(offset))
    }

    /// Substring between inclusive offsets; negative offsets count from the end.
    pub fn getrange(&mut self, key: &str, start: i64, end: i64) -> Result<String> {
        self.command(Command::new("GETRANGE").arg(key).arg(start).arg(end))
    }

    /// Set a new value and return the old one.
    pub fn getset(&mut self, key: &str, value: impl Into<CommandArgument>) -> Result<String> {
        self.command(Command::new("GETSET").arg(key).arg(value))
    }

    pub fn incr(&mut self, key: &str) -> Result<i64> {
        self.command(Command::new("INCR").arg(key))
    }

    pub fn incrby(&mut self, key: &str, increment: i64) -> Result<i64> {
        self.command(Command::new("INCRBY").arg(key).arg(increment))
    }

    pub fn incrbyfloat(&mut self, key: &str, increment: f64) -> Result<f64> {
        self.command(Command::new("INCRBYFLOAT").arg(key).arg(increment))
    }

    /// Values of all `keys`; missing keys yield empty strings.
    pub fn mget(&mut self, keys: &[&str]) -> Result<Vec<String>> {
        self.command(Command::new("MGET").args(keys.iter().copied()))
    }

    /// Set several keys at once from alternating keys and values.
    pub fn mset<I>(&mut self, key_values: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<CommandArgument>,
    {
        let pairs = collect_pairs("MSET", key_values)?;
        self.command(Command::new("MSET").args(pairs))
    }

    /// Like `mset`, but does nothing if any key already exists.
    pub fn msetnx<I>(&mut self, key_values: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Into<CommandArgument>,
    {
        let pairs = collect_pairs("MSETNX", key_values)?;
        self.command(Command::new("MSETNX").args(pairs))
    }

    pub fn set(&mut self, key: &str, value: impl Into<CommandArgument>) -> Result<String> {
        self.command(Command::new("SET").arg(key).arg(value))
    }

    /// Set or clear one bit; returns the previous bit.
    pub fn setbit(&mut self, key: &str, offset: u64, value: bool) -> Result<i64> {
        self.command(
            Command::new("SETBIT")
                .arg(key)
                .arg(offset)
                .arg(u8::from(value)),
        )
    }

    /// Set a value with a time to live in seconds.
    pub fn setex(
        &mut self,
        key: &str,
        seconds: u64,
        value: impl Into<CommandArgument>,
    ) -> Result<String> {
        self.command(Command::new("SETEX").arg(key).arg(seconds).arg(value))
    }

    /// Set only if the key does not exist.
    pub fn setnx(&mut self, key: &str, value: impl Into<CommandArgument>) -> Result<bool> {
        self.command(Command::new("SETNX").arg(key).arg(value))
    }

    /// Overwrite part of a string starting at `offset`; returns the new length.
    pub fn setrange(
        &mut self,
        key: &str,
        offset: u64,
        value: impl Into<CommandArgument>,
    ) -> Result<i64> {
        self.command(Command::new("SETRANGE").arg(key).arg(offset).arg(value))
    }

    pub fn strlen(&mut self, key: &str) -> Result<i64> {
        self.command(Command::new("STRLEN").arg(key))
    }
}
