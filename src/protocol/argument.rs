//! Command arguments
//!
//! Typed inputs to a command and their wire encoding. Every argument is sent
//! as a bulk string; integers are rendered as canonical base-10 ASCII.

use bytes::Bytes;

use crate::error::{ClientError, Result};

/// One typed command argument
#[derive(Debug, Clone, PartialEq)]
pub enum CommandArgument {
    /// UTF-8 text, sent as-is
    Text(String),

    /// Raw bytes, sent as-is
    Bytes(Bytes),

    /// Any signed integer, widened to 64 bits
    SignedInt(i64),

    /// Any unsigned integer, widened to 64 bits
    UnsignedInt(u64),

    /// Floating point value (scores, float increments)
    Float(f64),
}

impl CommandArgument {
    /// Encode to the bytes placed on the wire
    pub fn encode(&self) -> Result<Bytes> {
        match self {
            CommandArgument::Text(text) => Ok(Bytes::copy_from_slice(text.as_bytes())),
            CommandArgument::Bytes(data) => Ok(data.clone()),
            CommandArgument::SignedInt(n) => Ok(Bytes::from(n.to_string())),
            CommandArgument::UnsignedInt(n) => Ok(Bytes::from(n.to_string())),
            CommandArgument::Float(x) => encode_float(*x),
        }
    }

    /// Short name of the argument's type
    pub fn type_name(&self) -> &'static str {
        match self {
            CommandArgument::Text(_) => "text",
            CommandArgument::Bytes(_) => "bytes",
            CommandArgument::SignedInt(_) => "signed integer",
            CommandArgument::UnsignedInt(_) => "unsigned integer",
            CommandArgument::Float(_) => "float",
        }
    }
}

/// Encode an argument list into the frame handed to the transport
///
/// Fails on the first argument that cannot be encoded; no partial frame is
/// returned.
pub fn encode(arguments: &[CommandArgument]) -> Result<Vec<Bytes>> {
    arguments.iter().map(CommandArgument::encode).collect()
}

// Display gives the shortest round-trip form and `inf`/`-inf` for infinities,
// which is what the server's float parser accepts.
fn encode_float(x: f64) -> Result<Bytes> {
    if x.is_nan() {
        return Err(ClientError::UnsupportedArgumentType(
            "NaN cannot be sent as a float argument".to_string(),
        ));
    }
    Ok(Bytes::from(x.to_string()))
}

// =============================================================================
// Conversions
// =============================================================================

impl From<&str> for CommandArgument {
    fn from(value: &str) -> Self {
        CommandArgument::Text(value.to_string())
    }
}

impl From<String> for CommandArgument {
    fn from(value: String) -> Self {
        CommandArgument::Text(value)
    }
}

impl From<&String> for CommandArgument {
    fn from(value: &String) -> Self {
        CommandArgument::Text(value.clone())
    }
}

impl From<Bytes> for CommandArgument {
    fn from(value: Bytes) -> Self {
        CommandArgument::Bytes(value)
    }
}

impl From<Vec<u8>> for CommandArgument {
    fn from(value: Vec<u8>) -> Self {
        CommandArgument::Bytes(Bytes::from(value))
    }
}

impl From<&[u8]> for CommandArgument {
    fn from(value: &[u8]) -> Self {
        CommandArgument::Bytes(Bytes::copy_from_slice(value))
    }
}

impl<const N: usize> From<&[u8; N]> for CommandArgument {
    fn from(value: &[u8; N]) -> Self {
        CommandArgument::Bytes(Bytes::copy_from_slice(value))
    }
}

impl From<f64> for CommandArgument {
    fn from(value: f64) -> Self {
        CommandArgument::Float(value)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CommandArgument {
                fn from(value: $t) -> Self {
                    CommandArgument::SignedInt(value as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CommandArgument {
                fn from(value: $t) -> Self {
                    CommandArgument::UnsignedInt(value as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);
