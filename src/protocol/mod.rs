//! Protocol Module
//!
//! Defines the RESP wire protocol spoken with the server.
//!
//! ## Request Format
//! ```text
//! *3\r\n$3\r\nSET\r\n$1\r\nk\r\n$1\r\nv\r\n
//! ```
//! Every argument travels as a bulk string, whatever its type on the
//! caller's side (see [`CommandArgument`]).
//!
//! ## Reply Types
//! - `+` status
//! - `-` error
//! - `:` integer
//! - `$` bulk string (or nil)
//! - `*` array of replies (or nil)

mod argument;
mod command;
mod reply;
mod codec;

pub use argument::{encode, CommandArgument};
pub use command::Command;
pub use reply::{Reply, ReplyKind};
pub use codec::{
    decode_reply, encode_reply, encode_request, read_reply, read_request, write_reply,
    write_request, ReplyLimits, MAX_DEPTH, MAX_LINE_LEN,
};
