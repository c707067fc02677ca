//! Typed decoding
//!
//! Maps Rust types onto destination descriptors so command functions can
//! declare their result type statically.

use bytes::Bytes;

use super::coerce;
use super::{Destination, IntWidth};
use crate::error::Result;
use crate::protocol::Reply;

/// A type a reply can be decoded into
///
/// Implementations convert one node; callers go through
/// [`decode_as`](super::decode_as), which rejects error replies anywhere in
/// the tree before any conversion happens.
pub trait FromReply: Sized {
    /// Descriptor matching this type
    fn destination() -> Destination;

    /// Convert one reply node
    fn from_reply(reply: Reply) -> Result<Self>;
}

impl FromReply for String {
    fn destination() -> Destination {
        Destination::Text
    }

    fn from_reply(reply: Reply) -> Result<Self> {
        coerce::to_text(reply)
    }
}

impl FromReply for Bytes {
    fn destination() -> Destination {
        Destination::Bytes
    }

    fn from_reply(reply: Reply) -> Result<Self> {
        coerce::to_bytes(reply)
    }
}

impl FromReply for f64 {
    fn destination() -> Destination {
        Destination::FloatingPoint
    }

    fn from_reply(reply: Reply) -> Result<Self> {
        coerce::to_float(reply)
    }
}

impl FromReply for bool {
    fn destination() -> Destination {
        Destination::Boolean
    }

    fn from_reply(reply: Reply) -> Result<Self> {
        coerce::to_bool(reply)
    }
}

impl<T: FromReply> FromReply for Vec<T> {
    fn destination() -> Destination {
        Destination::sequence_of(T::destination())
    }

    fn from_reply(reply: Reply) -> Result<Self> {
        coerce::to_sequence(reply, Self::destination, T::from_reply)
    }
}

/// Nil decodes to `None` rather than to the zero value of `T`
impl<T: FromReply> FromReply for Option<T> {
    fn destination() -> Destination {
        T::destination()
    }

    fn from_reply(reply: Reply) -> Result<Self> {
        if reply.is_nil() {
            return Ok(None);
        }
        T::from_reply(reply).map(Some)
    }
}

// The coercions range-check against the width, so the casts are lossless.
macro_rules! impl_from_reply_signed {
    ($($t:ty => $width:expr),*) => {
        $(
            impl FromReply for $t {
                fn destination() -> Destination {
                    Destination::SignedInteger($width)
                }

                fn from_reply(reply: Reply) -> Result<Self> {
                    coerce::to_signed(reply, $width).map(|n| n as $t)
                }
            }
        )*
    };
}

macro_rules! impl_from_reply_unsigned {
    ($($t:ty => $width:expr),*) => {
        $(
            impl FromReply for $t {
                fn destination() -> Destination {
                    Destination::UnsignedInteger($width)
                }

                fn from_reply(reply: Reply) -> Result<Self> {
                    coerce::to_unsigned(reply, $width).map(|n| n as $t)
                }
            }
        )*
    };
}

impl_from_reply_signed!(
    i8 => IntWidth::W8,
    i16 => IntWidth::W16,
    i32 => IntWidth::W32,
    i64 => IntWidth::W64
);

impl_from_reply_unsigned!(
    u8 => IntWidth::W8,
    u16 => IntWidth::W16,
    u32 => IntWidth::W32,
    u64 => IntWidth::W64
);
