//! Server administration commands

use crate::client::Client;
use crate::error::Result;
use crate::network::Transport;
use crate::protocol::{Command, CommandArgument};

impl<T: Transport> Client<T> {
    /// Start an append-only file rewrite in the background.
    pub fn bgrewriteaof(&mut self) -> Result<String> {
        self.command(Command::new("BGREWRITEAOF"))
    }

    /// Save the dataset to disk in the background.
    pub fn bgsave(&mut self) -> Result<String> {
        self.command(Command::new("BGSAVE"))
    }

    /// Close the client connection identified by `ip:port`.
    pub fn client_kill(&mut self, ip: &str, port: u16) -> Result<String> {
        self.command(
            Command::new("CLIENT")
                .arg("KILL")
                .arg(format!("{}:{}", ip, port)),
        )
    }

    /// Information about connected clients, one line per client.
    pub fn client_list(&mut self) -> Result<String> {
        self.command(Command::new("CLIENT").arg("LIST"))
    }

    /// Name of the current connection; empty if none was set.
    pub fn client_getname(&mut self) -> Result<String> {
        self.command(Command::new("CLIENT").arg("GETNAME"))
    }

    /// Assign a name to the current connection.
    pub fn client_setname(&mut self, name: &str) -> Result<String> {
        self.command(Command::new("CLIENT").arg("SETNAME").arg(name))
    }

    /// Read configuration parameters matching `parameter`.
    ///
    /// The reply alternates parameter names and values.
    pub fn config_get(&mut self, parameter: &str) -> Result<Vec<String>> {
        self.command(Command::new("CONFIG").arg("GET").arg(parameter))
    }

    /// Change a configuration parameter at run time.
    pub fn config_set(
        &mut self,
        parameter: &str,
        value: impl Into<CommandArgument>,
    ) -> Result<String> {
        self.command(Command::new("CONFIG").arg("SET").arg(parameter).arg(value))
    }

    /// Reset the statistics reported by INFO.
    pub fn config_resetstat(&mut self) -> Result<String> {
        self.command(Command::new("CONFIG").arg("RESETSTAT"))
    }

    /// Number of keys in the selected database.
    pub fn dbsize(&mut self) -> Result<u64> {
        self.command(Command::new("DBSIZE"))
    }

    /// Debugging information about a key.
    pub fn debug_object(&mut self, key: &str) -> Result<String> {
        self.command(Command::new("DEBUG").arg("OBJECT").arg(key))
    }

    /// Crash the server. Only useful when testing crash handling.
    pub fn debug_segfault(&mut self) -> Result<String> {
        self.command(Command::new("DEBUG").arg("SEGFAULT"))
    }

    /// Delete every key of every database.
    pub fn flushall(&mut self) -> Result<String> {
        self.command(Command::new("FLUSHALL"))
    }

    /// Delete every key of the selected database.
    pub fn flushdb(&mut self) -> Result<String> {
        self.command(Command::new("FLUSHDB"))
    }

    /// Server information and statistics, optionally for one section.
    pub fn info(&mut self, section: Option<&str>) -> Result<String> {
        self.command(Command::new("INFO").args(section))
    }

    /// Unix time of the last successful save.
    pub fn lastsave(&mut self) -> Result<i64> {
        self.command(Command::new("LASTSAVE"))
    }

    /// Save the dataset to disk synchronously.
    pub fn save(&mut self) -> Result<String> {
        self.command(Command::new("SAVE"))
    }

    /// Server time as `[unix seconds, microseconds]`.
    pub fn time(&mut self) -> Result<Vec<u64>> {
        self.command(Command::new("TIME"))
    }
}
