//! Error definitions shared across library modules.
//! The codec itself is total; only the validation layer and the textual
//! interchange helpers can reject a value.
use crate::core::Field;
use thiserror_no_std::Error;

//================================================================================CODEC_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Rejections raised around the J1939 identifier codec.
pub enum CodecError {
    /// A field or a composite identifier does not fit its bit width.
    /// `value` is signed so that a typed negative number is reported as is.
    #[error("{field} must be between {} and {}, got {value}", .field.min(), .field.max())]
    OutOfRange { field: Field, value: i64 },
    /// Text could not be turned into a number or a known operation.
    #[error("{reason}")]
    InvalidInput { reason: InputErrorKind },
}

impl CodecError {
    /// Field concerned by an `OutOfRange` rejection.
    pub fn field(&self) -> Option<Field> {
        match self {
            CodecError::OutOfRange { field, .. } => Some(*field),
            CodecError::InvalidInput { .. } => None,
        }
    }

    /// Lower bound of the rejected field.
    pub fn min(&self) -> Option<u32> {
        self.field().map(Field::min)
    }

    /// Upper bound of the rejected field.
    pub fn max(&self) -> Option<u32> {
        self.field().map(Field::max)
    }
}

//================================================================================INPUT_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Reasons a piece of text was refused before reaching the codec.
pub enum InputErrorKind {
    /// Nothing but whitespace (or a bare radix prefix) was supplied.
    #[error("empty value")]
    Empty,
    /// A character is not a digit of the detected base, or is misplaced.
    #[error("invalid digit")]
    InvalidDigit,
    /// A minus sign on a number that has no field range to report against.
    #[error("negative value")]
    Negative,
    /// The number does not fit in 32 bits.
    #[error("number too large")]
    Overflow,
    /// Operation name is neither `j2u`/`encode` nor `u2j`/`decode`.
    #[error("unknown operation")]
    UnknownOperation,
    /// Wrong number of values for a field tuple.
    #[error("expected {expected} values, found {found}")]
    FieldCount { expected: usize, found: usize },
}

impl From<InputErrorKind> for CodecError {
    fn from(reason: InputErrorKind) -> Self {
        CodecError::InvalidInput { reason }
    }
}
