//! Protocol codec
//!
//! Encoding and decoding functions for the RESP wire protocol.
//!
//! ## Wire Format
//!
//! ### Request Format
//! Every request is an array of bulk strings:
//! ```text
//! *<argc>\r\n
//! $<len>\r\n<arg bytes>\r\n      (repeated argc times)
//! ```
//!
//! ### Reply Format
//! The first byte of each reply selects its type:
//! ```text
//! +<status>\r\n
//! -<error message>\r\n
//! :<integer>\r\n
//! $<len>\r\n<bytes>\r\n          ($-1\r\n is nil)
//! *<count>\r\n<count replies>    (*-1\r\n is nil)
//! ```

use std::io::{BufRead, ErrorKind, Read, Write};

use bytes::Bytes;

use super::Reply;
use crate::config::Config;
use crate::error::{ClientError, Result};

/// Longest header or simple-string line accepted (64 KB)
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// Deepest array nesting accepted in one reply
pub const MAX_DEPTH: usize = 64;

const CRLF: &[u8] = b"\r\n";

/// Bounds applied while parsing a reply
#[derive(Debug, Clone, Copy)]
pub struct ReplyLimits {
    pub max_bulk_len: usize,
    pub max_array_len: usize,
    pub max_depth: usize,
}

impl Default for ReplyLimits {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ReplyLimits {
    fn from(config: &Config) -> Self {
        Self {
            max_bulk_len: config.max_bulk_len,
            max_array_len: config.max_array_len,
            max_depth: MAX_DEPTH,
        }
    }
}

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Encode a request frame to bytes
pub fn encode_request<A: AsRef<[u8]>>(arguments: &[A]) -> Vec<u8> {
    let payload_len: usize = arguments.iter().map(|a| a.as_ref().len() + 16).sum();
    let mut message = Vec::with_capacity(16 + payload_len);

    put_header(&mut message, b'*', arguments.len() as i64);
    for argument in arguments {
        put_bulk(&mut message, argument.as_ref());
    }

    message
}

/// Read one request frame from a stream
///
/// Used by servers and test doubles; requests must be arrays of bulk strings.
pub fn read_request<R: BufRead>(reader: &mut R, limits: &ReplyLimits) -> Result<Vec<Bytes>> {
    match read_reply(reader, limits)? {
        Reply::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Reply::Bulk(Some(data)) => Ok(data),
                other => Err(ClientError::Protocol(format!(
                    "request argument must be a bulk string, got {}",
                    other.kind()
                ))),
            })
            .collect(),
        other => Err(ClientError::Protocol(format!(
            "request must be an array, got {}",
            other.kind()
        ))),
    }
}

/// Write a request frame to a stream
pub fn write_request<W: Write, A: AsRef<[u8]>>(writer: &mut W, arguments: &[A]) -> Result<()> {
    let bytes = encode_request(arguments);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Reply Encoding/Decoding
// =============================================================================

/// Encode a reply to bytes
pub fn encode_reply(reply: &Reply) -> Vec<u8> {
    let mut message = Vec::new();
    put_reply(&mut message, reply);
    message
}

fn put_reply(message: &mut Vec<u8>, reply: &Reply) {
    match reply {
        Reply::Status(text) => put_line(message, b'+', text.as_bytes()),
        Reply::Error(text) => put_line(message, b'-', text.as_bytes()),
        Reply::Integer(n) => put_header(message, b':', *n),
        Reply::Bulk(None) => put_header(message, b'$', -1),
        Reply::Bulk(Some(data)) => put_bulk(message, data),
        Reply::Array(items) => {
            put_header(message, b'*', items.len() as i64);
            for item in items {
                put_reply(message, item);
            }
        }
    }
}

/// Decode one complete reply from bytes
pub fn decode_reply(bytes: &[u8]) -> Result<Reply> {
    let mut cursor = bytes;
    match read_reply(&mut cursor, &ReplyLimits::default()) {
        Err(ClientError::Transport(ref e)) if e.kind() == ErrorKind::UnexpectedEof => Err(
            ClientError::Protocol(format!("incomplete reply: {} bytes", bytes.len())),
        ),
        other => other,
    }
}

/// Read one complete reply tree from a stream
///
/// Blocks until the whole tree, including every nested element, is read.
pub fn read_reply<R: BufRead>(reader: &mut R, limits: &ReplyLimits) -> Result<Reply> {
    read_reply_at(reader, limits, 0)
}

fn read_reply_at<R: BufRead>(reader: &mut R, limits: &ReplyLimits, depth: usize) -> Result<Reply> {
    let line = read_line(reader)?;
    let (&type_byte, body) = line
        .split_first()
        .ok_or_else(|| ClientError::Protocol("empty reply line".to_string()))?;

    match type_byte {
        b'+' => Ok(Reply::Status(line_text(body)?)),
        b'-' => Ok(Reply::Error(line_text(body)?)),
        b':' => Ok(Reply::Integer(parse_integer(body)?)),
        b'$' => {
            let len = match parse_length(body)? {
                Some(len) => len,
                None => return Ok(Reply::Bulk(None)),
            };
            if len > limits.max_bulk_len {
                return Err(ClientError::Protocol(format!(
                    "bulk string too large: {} bytes (max {})",
                    len, limits.max_bulk_len
                )));
            }

            let mut data = vec![0u8; len + CRLF.len()];
            reader.read_exact(&mut data)?;
            if &data[len..] != CRLF {
                return Err(ClientError::Protocol(
                    "bulk string not terminated by CRLF".to_string(),
                ));
            }
            data.truncate(len);
            Ok(Reply::Bulk(Some(Bytes::from(data))))
        }
        b'*' => {
            let count = match parse_length(body)? {
                Some(count) => count,
                None => return Ok(Reply::Bulk(None)),
            };
            if count > limits.max_array_len {
                return Err(ClientError::Protocol(format!(
                    "array too large: {} elements (max {})",
                    count, limits.max_array_len
                )));
            }
            if depth >= limits.max_depth {
                return Err(ClientError::Protocol(format!(
                    "array nesting deeper than {}",
                    limits.max_depth
                )));
            }

            let mut items = Vec::with_capacity(count.min(1024));
            for _ in 0..count {
                items.push(read_reply_at(reader, limits, depth + 1)?);
            }
            Ok(Reply::Array(items))
        }
        other => Err(ClientError::Protocol(format!(
            "unknown reply type: 0x{:02x}",
            other
        ))),
    }
}

/// Write a reply to a stream
pub fn write_reply<W: Write>(writer: &mut W, reply: &Reply) -> Result<()> {
    let bytes = encode_reply(reply);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Line helpers
// =============================================================================

/// Read one CRLF-terminated line, returning it without the terminator
fn read_line<R: BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    let mut line = Vec::new();
    let read = reader
        .by_ref()
        .take(MAX_LINE_LEN as u64)
        .read_until(b'\n', &mut line)?;

    if read == 0 {
        return Err(ClientError::Transport(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            "connection closed while waiting for a reply",
        )));
    }
    if !line.ends_with(b"\n") {
        if read == MAX_LINE_LEN {
            return Err(ClientError::Protocol(format!(
                "reply line longer than {} bytes",
                MAX_LINE_LEN
            )));
        }
        return Err(ClientError::Transport(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            "connection closed in the middle of a reply line",
        )));
    }
    if !line.ends_with(CRLF) {
        return Err(ClientError::Protocol(
            "reply line not terminated by CRLF".to_string(),
        ));
    }

    line.truncate(line.len() - CRLF.len());
    Ok(line)
}

fn line_text(body: &[u8]) -> Result<String> {
    String::from_utf8(body.to_vec())
        .map_err(|_| ClientError::Protocol("simple string is not valid UTF-8".to_string()))
}

fn parse_integer(body: &[u8]) -> Result<i64> {
    std::str::from_utf8(body)
        .ok()
        .and_then(|text| text.parse::<i64>().ok())
        .ok_or_else(|| {
            ClientError::Protocol(format!(
                "invalid integer in reply header: {:?}",
                String::from_utf8_lossy(body)
            ))
        })
}

/// Parse a bulk or array length; `-1` means nil
fn parse_length(body: &[u8]) -> Result<Option<usize>> {
    match parse_integer(body)? {
        -1 => Ok(None),
        n if n < 0 => Err(ClientError::Protocol(format!("invalid length: {}", n))),
        n => usize::try_from(n)
            .map(Some)
            .map_err(|_| ClientError::Protocol(format!("length does not fit in memory: {}", n))),
    }
}

fn put_header(message: &mut Vec<u8>, type_byte: u8, n: i64) {
    put_line(message, type_byte, n.to_string().as_bytes());
}

fn put_line(message: &mut Vec<u8>, type_byte: u8, body: &[u8]) {
    message.push(type_byte);
    message.extend_from_slice(body);
    message.extend_from_slice(CRLF);
}

fn put_bulk(message: &mut Vec<u8>, data: &[u8]) {
    put_header(message, b'$', data.len() as i64);
    message.extend_from_slice(data);
    message.extend_from_slice(CRLF);
}
