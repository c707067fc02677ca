//! Command definitions
//!
//! A command is an ordered argument list whose first element is the keyword.

use bytes::Bytes;

use super::argument::{self, CommandArgument};
use crate::error::Result;

/// A command ready to be encoded
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Keyword, kept separately for logging
    name: String,

    /// All arguments, keyword included
    arguments: Vec<CommandArgument>,
}

impl Command {
    /// Start a command with the given keyword
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            arguments: vec![CommandArgument::Text(name.to_string())],
        }
    }

    /// Append one argument
    pub fn arg(mut self, argument: impl Into<CommandArgument>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Append every argument from an iterator
    pub fn args<I>(mut self, arguments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CommandArgument>,
    {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }

    /// The command keyword
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All arguments, keyword first
    pub fn arguments(&self) -> &[CommandArgument] {
        &self.arguments
    }

    /// Number of arguments, keyword included
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Encode every argument into the frame sent by the transport
    pub fn encode(&self) -> Result<Vec<Bytes>> {
        argument::encode(&self.arguments)
    }
}
