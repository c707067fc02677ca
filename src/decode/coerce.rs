//! Per-destination coercions
//!
//! Each function converts one reply node into one destination kind. A nil
//! reply always yields the destination's zero value. Integers outside the
//! destination's range are rejected, never saturated or wrapped.

use std::num::IntErrorKind;

use bytes::Bytes;

use super::{Destination, IntWidth};
use crate::error::{ClientError, Result};
use crate::protocol::{Reply, ReplyKind};

/// A reply node usable as a scalar source
enum Scalar {
    Status(String),
    Bulk(Bytes),
    Integer(i64),
    Nil,
}

fn scalar(reply: Reply, to: &Destination) -> Result<Scalar> {
    match reply {
        Reply::Status(text) => Ok(Scalar::Status(text)),
        Reply::Bulk(Some(data)) => Ok(Scalar::Bulk(data)),
        Reply::Bulk(None) => Ok(Scalar::Nil),
        Reply::Integer(n) => Ok(Scalar::Integer(n)),
        Reply::Error(message) => Err(ClientError::Server(message)),
        Reply::Array(_) => Err(ClientError::UnsupportedCoercion {
            from: ReplyKind::Array,
            to: to.clone(),
        }),
    }
}

// =============================================================================
// Text
// =============================================================================

pub(crate) fn to_text(reply: Reply) -> Result<String> {
    let to = Destination::Text;
    match scalar(reply, &to)? {
        Scalar::Status(text) => Ok(text),
        Scalar::Bulk(data) => {
            String::from_utf8(data.to_vec()).map_err(|_| ClientError::InvalidUtf8 { to })
        }
        Scalar::Integer(n) => Ok(n.to_string()),
        Scalar::Nil => Ok(String::new()),
    }
}

pub(crate) fn to_bytes(reply: Reply) -> Result<Bytes> {
    match scalar(reply, &Destination::Bytes)? {
        Scalar::Status(text) => Ok(Bytes::from(text)),
        Scalar::Bulk(data) => Ok(data),
        Scalar::Integer(n) => Ok(Bytes::from(n.to_string())),
        Scalar::Nil => Ok(Bytes::new()),
    }
}

// =============================================================================
// Numbers
// =============================================================================

pub(crate) fn to_signed(reply: Reply, width: IntWidth) -> Result<i64> {
    let to = Destination::SignedInteger(width);
    let value = match scalar(reply, &to)? {
        Scalar::Status(text) => parse_integer(text.as_bytes(), &to)?,
        Scalar::Bulk(data) => parse_integer(&data, &to)?,
        Scalar::Integer(n) => i128::from(n),
        Scalar::Nil => return Ok(0),
    };

    let (min, max) = width.signed_range();
    if value < min || value > max {
        return Err(out_of_range(value, to));
    }
    Ok(value as i64)
}

pub(crate) fn to_unsigned(reply: Reply, width: IntWidth) -> Result<u64> {
    let to = Destination::UnsignedInteger(width);
    let value = match scalar(reply, &to)? {
        Scalar::Status(text) => parse_integer(text.as_bytes(), &to)?,
        Scalar::Bulk(data) => parse_integer(&data, &to)?,
        Scalar::Integer(n) => i128::from(n),
        Scalar::Nil => return Ok(0),
    };

    if value < 0 || value > width.unsigned_max() {
        return Err(out_of_range(value, to));
    }
    Ok(value as u64)
}

pub(crate) fn to_float(reply: Reply) -> Result<f64> {
    let to = Destination::FloatingPoint;
    match scalar(reply, &to)? {
        Scalar::Status(text) => parse_float(text.as_bytes(), &to),
        Scalar::Bulk(data) => parse_float(&data, &to),
        Scalar::Integer(n) => Ok(n as f64),
        Scalar::Nil => Ok(0.0),
    }
}

/// Integer replies are truthy when non-zero; a status reply reports success.
pub(crate) fn to_bool(reply: Reply) -> Result<bool> {
    let to = Destination::Boolean;
    match scalar(reply, &to)? {
        Scalar::Status(_) => Ok(true),
        Scalar::Bulk(data) => Ok(parse_integer(&data, &to)? != 0),
        Scalar::Integer(n) => Ok(n != 0),
        Scalar::Nil => Ok(false),
    }
}

// =============================================================================
// Sequences
// =============================================================================

/// Decode an array element by element, preserving order and length
///
/// `to` names the full sequence destination and is only built on failure.
pub(crate) fn to_sequence<T, F>(
    reply: Reply,
    to: impl FnOnce() -> Destination,
    element: F,
) -> Result<Vec<T>>
where
    F: FnMut(Reply) -> Result<T>,
{
    match reply {
        Reply::Array(items) => items.into_iter().map(element).collect(),
        Reply::Bulk(None) => Ok(Vec::new()),
        Reply::Error(message) => Err(ClientError::Server(message)),
        other => Err(ClientError::UnsupportedCoercion {
            from: other.kind(),
            to: to(),
        }),
    }
}

// =============================================================================
// Parsing helpers
// =============================================================================

fn parse_integer(text: &[u8], to: &Destination) -> Result<i128> {
    let text = std::str::from_utf8(text).map_err(|_| malformed(text, to))?;
    text.parse::<i128>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ClientError::IntegerOutOfRange {
            value: text.to_string(),
            to: to.clone(),
        },
        _ => malformed(text.as_bytes(), to),
    })
}

fn parse_float(text: &[u8], to: &Destination) -> Result<f64> {
    std::str::from_utf8(text)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| malformed(text, to))
}

fn malformed(text: &[u8], to: &Destination) -> ClientError {
    ClientError::MalformedNumericReply {
        text: String::from_utf8_lossy(text).into_owned(),
        to: to.clone(),
    }
}

fn out_of_range(value: i128, to: Destination) -> ClientError {
    ClientError::IntegerOutOfRange {
        value: value.to_string(),
        to,
    }
}
