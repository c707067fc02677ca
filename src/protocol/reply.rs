//! Reply definitions
//!
//! Represents parsed replies from the server.

use std::fmt;

use bytes::Bytes;

/// One parsed server reply
///
/// A reply tree belongs to exactly one command invocation and is consumed
/// by the decode call for that command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Short success indicator (`+OK`)
    Status(String),

    /// Server-reported failure (`-ERR ...`)
    Error(String),

    /// Binary string, or `None` for nil (`$-1` and `*-1`)
    Bulk(Option<Bytes>),

    /// Signed 64-bit integer (`:42`)
    Integer(i64),

    /// Ordered nested replies (`*N`)
    Array(Vec<Reply>),
}

/// Reply variant tag, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Status,
    Error,
    Bulk,
    Nil,
    Integer,
    Array,
}

impl fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReplyKind::Status => "status",
            ReplyKind::Error => "error",
            ReplyKind::Bulk => "bulk string",
            ReplyKind::Nil => "nil",
            ReplyKind::Integer => "integer",
            ReplyKind::Array => "array",
        };
        f.write_str(name)
    }
}

impl Reply {
    /// Create a status reply
    pub fn status(text: impl Into<String>) -> Self {
        Reply::Status(text.into())
    }

    /// Create an error reply
    pub fn error(message: impl Into<String>) -> Self {
        Reply::Error(message.into())
    }

    /// Create a bulk string reply
    pub fn bulk(data: impl Into<Bytes>) -> Self {
        Reply::Bulk(Some(data.into()))
    }

    /// Create a nil reply
    pub fn nil() -> Self {
        Reply::Bulk(None)
    }

    /// Get the variant tag
    pub fn kind(&self) -> ReplyKind {
        match self {
            Reply::Status(_) => ReplyKind::Status,
            Reply::Error(_) => ReplyKind::Error,
            Reply::Bulk(Some(_)) => ReplyKind::Bulk,
            Reply::Bulk(None) => ReplyKind::Nil,
            Reply::Integer(_) => ReplyKind::Integer,
            Reply::Array(_) => ReplyKind::Array,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Reply::Bulk(None))
    }

    /// First error message in the tree, searching depth-first
    pub fn server_error(&self) -> Option<&str> {
        match self {
            Reply::Error(message) => Some(message),
            Reply::Array(items) => items.iter().find_map(Reply::server_error),
            _ => None,
        }
    }
}

/// Human-readable rendering in the style of interactive clients
impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_indented(f, self, 0)
    }
}

fn write_indented(f: &mut fmt::Formatter<'_>, reply: &Reply, indent: usize) -> fmt::Result {
    match reply {
        Reply::Status(text) => f.write_str(text),
        Reply::Error(message) => write!(f, "(error) {}", message),
        Reply::Integer(n) => write!(f, "(integer) {}", n),
        Reply::Bulk(None) => f.write_str("(nil)"),
        Reply::Bulk(Some(data)) => write!(f, "{:?}", String::from_utf8_lossy(data)),
        Reply::Array(items) if items.is_empty() => f.write_str("(empty array)"),
        Reply::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, "\n{:indent$}", "", indent = indent)?;
                }
                let label = format!("{}) ", i + 1);
                f.write_str(&label)?;
                write_indented(f, item, indent + label.len())?;
            }
            Ok(())
        }
    }
}
