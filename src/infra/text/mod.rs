//! Textual interchange for identifiers and field tuples.
//!
//! Numbers are accepted with an auto-detected base: `0x` hexadecimal,
//! `0o` octal, `0b` binary, decimal otherwise. Identifiers are rendered as
//! `0x` followed by eight uppercase hex digits; fields as decimal with the
//! zero-padded hex value in parentheses.
use core::fmt;
use core::str::FromStr;

use crate::core::Field;
use crate::error::{CodecError, InputErrorKind};
use crate::protocol::transport::can_id::{validate, CanId, J1939Fields};

/// Number of values in a J1939 field tuple.
const FIELD_COUNT: usize = 4;

//==================================================================================PARSE
/// Parse an unsigned 32-bit integer, detecting the base from its prefix.
///
/// Underscores are allowed between digits (`0x18EA_00F9`). A decimal number
/// may not start with `0` unless every digit is zero, so `012` is refused
/// rather than silently read as twelve. A leading `+` is accepted; a leading
/// `-` is refused unless the magnitude is zero.
pub fn parse_u32(text: &str) -> Result<u32, CodecError> {
    match parse_signed(text)? {
        (true, magnitude) if magnitude != 0 => Err(InputErrorKind::Negative.into()),
        (_, magnitude) => Ok(magnitude),
    }
}

/// Parse a value and check it against the range of `field`.
///
/// A well-formed negative number is below every field's lower bound, so it
/// is reported as `OutOfRange` rather than as malformed text.
pub fn parse_field(field: Field, text: &str) -> Result<u32, CodecError> {
    let (negative, magnitude) = parse_signed(text)?;
    #[cfg(feature = "defmt")]
    defmt::trace!("parsed {} = {} (negative: {})", field, magnitude, negative);
    if negative && magnitude != 0 {
        return Err(CodecError::OutOfRange {
            field,
            value: -i64::from(magnitude),
        });
    }
    validate(field, magnitude)
}

/// Split off an optional sign and parse the magnitude.
/// Returns `(negative, magnitude)`.
fn parse_signed(text: &str) -> Result<(bool, u32), CodecError> {
    let text = text.trim();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'+') => (false, &text[1..]),
        Some(b'-') => (true, &text[1..]),
        _ => (false, text),
    };
    if unsigned.is_empty() {
        return Err(InputErrorKind::Empty.into());
    }

    let (radix, digits) = split_radix(unsigned);
    if digits.is_empty() {
        return Err(InputErrorKind::Empty.into());
    }
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return Err(InputErrorKind::InvalidDigit.into());
    }
    let leading_zero = digits.len() > 1 && digits.starts_with('0');
    if radix == 10 && leading_zero && digits.bytes().any(|b| b != b'0' && b != b'_') {
        return Err(InputErrorKind::InvalidDigit.into());
    }

    let mut value: u32 = 0;
    for c in digits.chars().filter(|&c| c != '_') {
        let digit = c.to_digit(radix).ok_or(InputErrorKind::InvalidDigit)?;
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or(InputErrorKind::Overflow)?;
    }
    Ok((negative, value))
}

/// Split the radix prefix off `text`. One underscore may follow a prefix.
fn split_radix(text: &str) -> (u32, &str) {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => 16,
            b'o' | b'O' => 8,
            b'b' | b'B' => 2,
            _ => return (10, text),
        };
        let digits = &text[2..];
        return (radix, digits.strip_prefix('_').unwrap_or(digits));
    }
    (10, text)
}

//==================================================================================FORMAT
/// Adapter printing a single field as `value (0xHH)`.
#[derive(Clone, Copy, Debug)]
pub struct FieldValue {
    pub field: Field,
    pub value: u32,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (0x{:0width$X})",
            self.value,
            self.value,
            width = self.field.hex_digits()
        )
    }
}

impl fmt::Display for CanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.raw())
    }
}

impl fmt::UpperHex for CanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.raw(), f)
    }
}

impl fmt::LowerHex for CanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.raw(), f)
    }
}

impl fmt::Display for J1939Fields {
    /// One labelled line per field, e.g. `PDU Format (PF): 234 (0xEA)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, field) in Field::PACKED.into_iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            match field.short_name() {
                Some(short) => write!(f, "{} ({}): ", field.name(), short)?,
                None => write!(f, "{}: ", field.name())?,
            }
            write!(
                f,
                "{}",
                FieldValue {
                    field,
                    value: self.get(field)
                }
            )?;
        }
        Ok(())
    }
}

//==================================================================================FROM_STR
impl FromStr for CanId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanId::new(parse_field(Field::CanId, s)?)
    }
}

impl FromStr for J1939Fields {
    type Err = CodecError;

    /// Four numbers, priority first, separated by whitespace and/or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = [0u32; FIELD_COUNT];
        let mut found = 0;
        for token in s
            .split(|c: char| c == ',' || c.is_ascii_whitespace())
            .filter(|token| !token.is_empty())
        {
            if let Some(field) = Field::PACKED.get(found) {
                values[found] = parse_field(*field, token)?;
            }
            found += 1;
        }
        if found != FIELD_COUNT {
            return Err(InputErrorKind::FieldCount {
                expected: FIELD_COUNT,
                found,
            }
            .into());
        }
        let [priority, pdu_format, pdu_specific, source_address] = values;
        J1939Fields::try_from_raw(priority, pdu_format, pdu_specific, source_address)
    }
}
