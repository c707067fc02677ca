//! Generic key commands

use bytes::Bytes;

use crate::client::Client;
use crate::error::Result;
use crate::network::Transport;
use crate::protocol::Command;

impl<T: Transport> Client<T> {
    /// Remove the given keys; returns how many existed.
    pub fn del(&mut self, keys: &[&str]) -> Result<i64> {
        self.command(Command::new("DEL").args(keys.iter().copied()))
    }

    /// Serialized form of the value at `key`, suitable for RESTORE.
    pub fn dump(&mut self, key: &str) -> Result<Bytes> {
        self.command(Command::new("DUMP").arg(key))
    }

    pub fn exists(&mut self, key: &str) -> Result<bool> {
        self.command(Command::new("EXISTS").arg(key))
    }

    /// Set a time to live in seconds; false if the key does not exist.
    pub fn expire(&mut self, key: &str, seconds: u64) -> Result<bool> {
        self.command(Command::new("EXPIRE").arg(key).arg(seconds))
    }

    /// Expire the key at an absolute Unix timestamp (seconds).
    pub fn expireat(&mut self, key: &str, unix_time: u64) -> Result<bool> {
        self.command(Command::new("EXPIREAT").arg(key).arg(unix_time))
    }

    /// All keys matching a glob-style pattern.
    pub fn keys(&mut self, pattern: &str) -> Result<Vec<String>> {
        self.command(Command::new("KEYS").arg(pattern))
    }

    /// Atomically transfer a key to another server.
    pub fn migrate(
        &mut self,
        host: &str,
        port: u16,
        key: &str,
        destination_db: u32,
        timeout_ms: u64,
    ) -> Result<String> {
        self.command(
            Command::new("MIGRATE")
                .arg(host)
                .arg(port)
                .arg(key)
                .arg(destination_db)
                .arg(timeout_ms),
        )
    }

    /// Move a key to another database of the same server.
    pub fn move_key(&mut self, key: &str, db: u32) -> Result<bool> {
        self.command(Command::new("MOVE").arg(key).arg(db))
    }

    /// Inspect the internals of the value at `key`
    /// (`ENCODING`, `REFCOUNT` or `IDLETIME`).
    pub fn object(&mut self, subcommand: &str, key: &str) -> Result<String> {
        self.command(Command::new("OBJECT").arg(subcommand).arg(key))
    }

    /// Remove the time to live of a key.
    pub fn persist(&mut self, key: &str) -> Result<bool> {
        self.command(Command::new("PERSIST").arg(key))
    }

    /// Set a time to live in milliseconds.
    pub fn pexpire(&mut self, key: &str, milliseconds: u64) -> Result<bool> {
        self.command(Command::new("PEXPIRE").arg(key).arg(milliseconds))
    }

    /// Remaining time to live in milliseconds (-1 without expiry, -2 if missing).
    pub fn pttl(&mut self, key: &str) -> Result<i64> {
        self.command(Command::new("PTTL").arg(key))
    }

    /// A random key; empty if the database is empty.
    pub fn randomkey(&mut self) -> Result<String> {
        self.command(Command::new("RANDOMKEY"))
    }

    pub fn rename(&mut self, key: &str, new_key: &str) -> Result<String> {
        self.command(Command::new("RENAME").arg(key).arg(new_key))
    }

    /// Rename only if `new_key` does not exist yet.
    pub fn renamenx(&mut self, key: &str, new_key: &str) -> Result<bool> {
        self.command(Command::new("RENAMENX").arg(key).arg(new_key))
    }

    /// Remaining time to live in seconds (-1 without expiry, -2 if missing).
    pub fn ttl(&mut self, key: &str) -> Result<i64> {
        self.command(Command::new("TTL").arg(key))
    }

    /// Type of the value at `key` (`string`, `list`, `set`, ... or `none`).
    pub fn key_type(&mut self, key: &str) -> Result<String> {
        self.command(Command::new("TYPE").arg(key))
    }
}
