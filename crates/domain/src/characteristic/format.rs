//! Primitive formats a characteristic can declare.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The primitive kind of a characteristic's value.
///
/// The set is closed: adding a format forces every `match` over it to be
/// revisited, including the coercion rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacteristicFormat {
    Bool,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int,
    Float,
    String,
    Data,
    Tlv8,
}

impl CharacteristicFormat {
    /// Wire name of the format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Data => "data",
            Self::Tlv8 => "tlv8",
        }
    }

    /// Largest value representable by an unsigned format's bit width.
    ///
    /// Returns `None` for every other format.
    #[must_use]
    pub fn unsigned_max(self) -> Option<u64> {
        match self {
            Self::Uint8 => Some(u64::from(u8::MAX)),
            Self::Uint16 => Some(u64::from(u16::MAX)),
            Self::Uint32 => Some(u64::from(u32::MAX)),
            Self::Uint64 => Some(u64::MAX),
            Self::Bool
            | Self::Int
            | Self::Float
            | Self::String
            | Self::Data
            | Self::Tlv8 => None,
        }
    }
}

impl fmt::Display for CharacteristicFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
