//! Destination descriptors
//!
//! Describes the shape a reply is decoded into.

use std::fmt;

/// Bit width of an integer destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    /// Inclusive `(min, max)` of a signed integer of this width
    pub fn signed_range(self) -> (i128, i128) {
        let half = 1i128 << (self.bits() - 1);
        (-half, half - 1)
    }

    /// Largest unsigned integer of this width
    pub fn unsigned_max(self) -> i128 {
        (1i128 << self.bits()) - 1
    }
}

/// Shape a reply is coerced into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// UTF-8 text
    Text,

    /// Raw bytes
    Bytes,

    SignedInteger(IntWidth),

    UnsignedInteger(IntWidth),

    FloatingPoint,

    Boolean,

    /// Homogeneous sequence decoded element by element
    SequenceOf(Box<Destination>),
}

impl Destination {
    pub fn sequence_of(element: Destination) -> Self {
        Destination::SequenceOf(Box::new(element))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Destination::SequenceOf(_))
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Text => f.write_str("text"),
            Destination::Bytes => f.write_str("bytes"),
            Destination::SignedInteger(width) => write!(f, "i{}", width.bits()),
            Destination::UnsignedInteger(width) => write!(f, "u{}", width.bits()),
            Destination::FloatingPoint => f.write_str("f64"),
            Destination::Boolean => f.write_str("bool"),
            Destination::SequenceOf(element) => write!(f, "sequence of {}", element),
        }
    }
}
