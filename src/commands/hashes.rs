//! Hash commands

use super::collect_pairs;
use crate::client::Client;
use crate::error::Result;
use crate::network::Transport;
use crate::protocol::{Command, CommandArgument};

impl<T: Transport> Client<T> {
    /// Remove fields from the hash; returns how many were removed.
    pub fn hdel(&mut self, key: &str, fields: &[&str]) -> Result<i64> {
        self.command(Command::new("HDEL").arg(key).args(fields.iter().copied()))
    }

    pub fn hexists(&mut self, key: &str, field: &str) -> Result<bool> {
        self.command(Command::new("HEXISTS").arg(key).arg(field))
    }

    /// Value of `field`; empty when the field does not exist.
    pub fn hget(&mut self, key: &str, field: &str) -> Result<String> {
        self.command(Command::new("HGET").arg(key).arg(field))
    }

    /// Every field followed by its value.
    pub fn hgetall(&mut self, key: &str) -> Result<Vec<String>> {
        self.command(Command::new("HGETALL").arg(key))
    }

    pub fn hincrby(&mut self, key: &str, field: &str, increment: i64) -> Result<i64> {
        self.command(Command::new("HINCRBY").arg(key).arg(field).arg(increment))
    }

    pub fn hincrbyfloat(&mut self, key: &str, field: &str, increment: f64) -> Result<f64> {
        self.command(
            Command::new("HINCRBYFLOAT")
                .arg(key)
                .arg(field)
                .arg(increment),
        )
    }

    pub fn hkeys(&mut self, key: &str) -> Result<Vec<String>> {
        self.command(Command::new("HKEYS").arg(key))
    }

    pub fn hlen(&mut self, key: &str) -> Result<i64> {
        self.command(Command::new("HLEN").arg(key))
    }

    /// Values of the given fields, in order; missing fields yield empty strings.
    pub fn hmget(&mut self, key: &str, fields: &[&str]) -> Result<Vec<String>> {
        self.command(Command::new("HMGET").arg(key).args(fields.iter().copied()))
    }

    /// Set several fields from alternating fields and values.
    pub fn hmset<I>(&mut self, key: &str, field_values: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<CommandArgument>,
    {
        let pairs = collect_pairs("HMSET", field_values)?;
        self.command(Command::new("HMSET").arg(key).args(pairs))
    }

    /// Set one field; true if the field is new.
    pub fn hset(
        &mut self,
        key: &str,
        field: &str,
        value: impl Into<CommandArgument>,
    ) -> Result<bool> {
        self.command(Command::new("HSET").arg(key).arg(field).arg(value))
    }

    /// Set one field only if it does not exist yet.
    pub fn hsetnx(
        &mut self,
        key: &str,
        field: &str,
        value: impl Into<CommandArgument>,
    ) -> Result<bool> {
        self.command(Command::new("HSETNX").arg(key).arg(field).arg(value))
    }

    pub fn hvals(&mut self, key: &str) -> Result<Vec<String>> {
        self.command(Command::new("HVALS").arg(key))
    }
}
