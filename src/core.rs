//! Shared vocabulary of the crate: the fields of a J1939 identifier and the
//! operations a caller can request on them.
//!
//! # Bit layout (29-bit extended identifier)
//!
//! ```text
//! Bits 26-28  ( 3 bits) : Priority
//! Bits 16-23  ( 8 bits) : PDU Format (PF)
//! Bits  8-15  ( 8 bits) : PDU Specific (PS)
//! Bits  0-7   ( 8 bits) : Source Address (SA)
//! ```
//!
//! Bits 24 and 25 (data page and extended data page in J1939) are outside
//! the four-field tuple: decoding drops them and encoding leaves them clear.
//! Bits 29-31 are never set.
use core::fmt;
use core::str::FromStr;

use crate::error::{CodecError, InputErrorKind};

//==================================================================================FIELD
/// One bounded quantity handled by the codec.
///
/// The four J1939 fields are packed into the identifier; `CanId` names the
/// composite 29-bit value itself so that range errors on either side of the
/// codec share a single description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Priority,
    PduFormat,
    PduSpecific,
    SourceAddress,
    CanId,
}

impl Field {
    /// The four packed fields, most significant first.
    pub const PACKED: [Field; 4] = [
        Field::Priority,
        Field::PduFormat,
        Field::PduSpecific,
        Field::SourceAddress,
    ];

    /// Width of the field in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Field::Priority => 3,
            Field::PduFormat | Field::PduSpecific | Field::SourceAddress => 8,
            Field::CanId => 29,
        }
    }

    /// Position of the field's least significant bit inside the identifier.
    #[inline]
    pub const fn shift(self) -> u32 {
        match self {
            Field::Priority => 26,
            Field::PduFormat => 16,
            Field::PduSpecific => 8,
            Field::SourceAddress | Field::CanId => 0,
        }
    }

    /// Mask applied to the field value before shifting.
    #[inline]
    pub const fn mask(self) -> u32 {
        (1 << self.bits()) - 1
    }

    /// Lowest accepted value (always zero, every field is unsigned).
    #[inline]
    pub const fn min(self) -> u32 {
        0
    }

    /// Highest accepted value.
    #[inline]
    pub const fn max(self) -> u32 {
        self.mask()
    }

    /// Returns `true` when `value` fits in the field.
    #[inline]
    pub const fn contains(self, value: u32) -> bool {
        value <= self.max()
    }

    /// Human readable label, as printed by the calculator.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Priority => "Priority",
            Field::PduFormat => "PDU Format",
            Field::PduSpecific => "PDU Specific",
            Field::SourceAddress => "Source Address",
            Field::CanId => "CAN ID",
        }
    }

    /// Prompt shown by an interactive front end when asking for the field.
    pub const fn prompt(self) -> &'static str {
        match self {
            Field::Priority => "Enter priority (0-7): ",
            Field::PduFormat => "Enter PDU Format (0-255): ",
            Field::PduSpecific => "Enter PDU Specific (0-255): ",
            Field::SourceAddress => "Enter Source Address (0-255): ",
            Field::CanId => "Enter CAN ID (e.g., 0x18EA00F9): ",
        }
    }

    /// Abbreviation used in J1939 literature (`PF`, `PS`, `SA`).
    pub const fn short_name(self) -> Option<&'static str> {
        match self {
            Field::PduFormat => Some("PF"),
            Field::PduSpecific => Some("PS"),
            Field::SourceAddress => Some("SA"),
            Field::Priority | Field::CanId => None,
        }
    }

    /// Number of hexadecimal digits used when displaying the field.
    pub const fn hex_digits(self) -> usize {
        match self {
            Field::Priority => 1,
            Field::PduFormat | Field::PduSpecific | Field::SourceAddress => 2,
            Field::CanId => 8,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//==================================================================================OPERATION
/// Direction of a conversion requested by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    /// J1939 fields to a raw `u32` identifier (`j2u`).
    Encode,
    /// Raw `u32` identifier to J1939 fields (`u2j`).
    Decode,
}

impl Operation {
    /// Short mode name accepted on the command line.
    pub const fn mode_name(self) -> &'static str {
        match self {
            Operation::Encode => "j2u",
            Operation::Decode => "u2j",
        }
    }
}

impl FromStr for Operation {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "j2u" | "encode" => Ok(Operation::Encode),
            "u2j" | "decode" => Ok(Operation::Decode),
            _ => Err(CodecError::InvalidInput {
                reason: InputErrorKind::UnknownOperation,
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mode_name())
    }
}
