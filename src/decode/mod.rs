//! Decode Module
//!
//! Coerces a reply tree into a caller-chosen destination shape.
//!
//! ## Rules
//! - Any error reply, at any depth, fails the whole decode with
//!   `ClientError::Server` before a single node is converted.
//! - Arrays only decode into sequences; the output has exactly one element
//!   per array item, in order.
//! - Nil decodes into the destination's zero value (`""`, `0`, `0.0`,
//!   `false`, empty sequence), including nil items inside arrays.
//! - Text that does not parse as the requested number fails with
//!   `MalformedNumericReply`; a number that does not fit fails with
//!   `IntegerOutOfRange`.
//!
//! Two entry points share the same coercions: [`decode`] is driven by a
//! runtime [`Destination`] and returns a [`Value`] tree, [`decode_as`] is
//! driven by a [`FromReply`] type.

mod coerce;
mod destination;
mod from_reply;
mod value;

pub use destination::{Destination, IntWidth};
pub use from_reply::FromReply;
pub use value::Value;

use crate::error::{ClientError, Result};
use crate::protocol::Reply;

/// Decode a reply into the shape described by `destination`
pub fn decode(reply: Reply, destination: &Destination) -> Result<Value> {
    reject_server_error(&reply)?;
    decode_value(reply, destination)
}

/// Decode a reply into `T`
pub fn decode_as<T: FromReply>(reply: Reply) -> Result<T> {
    reject_server_error(&reply)?;
    T::from_reply(reply)
}

fn decode_value(reply: Reply, destination: &Destination) -> Result<Value> {
    match destination {
        Destination::Text => coerce::to_text(reply).map(Value::Text),
        Destination::Bytes => coerce::to_bytes(reply).map(Value::Bytes),
        Destination::SignedInteger(width) => coerce::to_signed(reply, *width).map(Value::Signed),
        Destination::UnsignedInteger(width) => {
            coerce::to_unsigned(reply, *width).map(Value::Unsigned)
        }
        Destination::FloatingPoint => coerce::to_float(reply).map(Value::Float),
        Destination::Boolean => coerce::to_bool(reply).map(Value::Boolean),
        Destination::SequenceOf(element) => coerce::to_sequence(
            reply,
            || destination.clone(),
            |item| decode_value(item, element),
        )
        .map(Value::Sequence),
    }
}

fn reject_server_error(reply: &Reply) -> Result<()> {
    match reply.server_error() {
        Some(message) => Err(ClientError::Server(message.to_string())),
        None => Ok(()),
    }
}
