//! Creation and extraction of the 29-bit CAN identifiers defined by
//! SAE J1939: priority, PDU Format, PDU Specific and Source Address.
//!
//! Two layers live here:
//! - the raw codec, [`encode`] and [`decode`], total functions that mask every
//!   field to its width and never fail;
//! - the validation layer, [`validate_fields`] and [`validate_can_id`], and the
//!   typed wrappers [`CanId`] and [`J1939Fields`] that can only hold values
//!   accepted by it.
use crate::core::Field;
use crate::error::CodecError;
use embedded_can::{ExtendedId, Id};

//==================================================================================RAW_CODEC
/// Pack the four J1939 fields into a 29-bit identifier.
///
/// Each field is masked to its width first, so out-of-range input wraps
/// (`encode(8, ..)` equals `encode(0, ..)`). Use [`J1939Fields::try_from_raw`]
/// when such input must be rejected instead.
#[inline]
pub const fn encode(
    priority: u32,
    pdu_format: u32,
    pdu_specific: u32,
    source_address: u32,
) -> u32 {
    ((priority & 0x07) << 26)
        | ((pdu_format & 0xFF) << 16)
        | ((pdu_specific & 0xFF) << 8)
        | (source_address & 0xFF)
}

/// Split an identifier into `(priority, pdu_format, pdu_specific, source_address)`.
///
/// Accepts any `u32`; bits outside the four fields are ignored.
#[inline]
pub const fn decode(can_id: u32) -> (u8, u8, u8, u8) {
    (
        ((can_id >> 26) & 0x07) as u8,
        ((can_id >> 16) & 0xFF) as u8,
        ((can_id >> 8) & 0xFF) as u8,
        (can_id & 0xFF) as u8,
    )
}

//==================================================================================VALIDATION
/// Check a single value against the range of `field`.
pub fn validate(field: Field, value: u32) -> Result<u32, CodecError> {
    if field.contains(value) {
        Ok(value)
    } else {
        #[cfg(feature = "defmt")]
        defmt::debug!("{} rejected: {} > {}", field, value, field.max());
        Err(CodecError::OutOfRange {
            field,
            value: i64::from(value),
        })
    }
}

/// Validate encode-direction input. Fields are checked most significant
/// first and the first offending one is reported.
pub fn validate_fields(
    priority: u32,
    pdu_format: u32,
    pdu_specific: u32,
    source_address: u32,
) -> Result<(), CodecError> {
    validate(Field::Priority, priority)?;
    validate(Field::PduFormat, pdu_format)?;
    validate(Field::PduSpecific, pdu_specific)?;
    validate(Field::SourceAddress, source_address)?;
    Ok(())
}

/// Validate decode-direction input against the 29-bit ceiling.
#[inline]
pub fn validate_can_id(can_id: u32) -> Result<u32, CodecError> {
    validate(Field::CanId, can_id)
}

//==================================================================================CAN_ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Extended CAN identifier, guaranteed to fit in 29 bits.
///
/// ```
/// use j1939_id::protocol::transport::can_id::CanId;
///
/// let id = CanId::new(0x18EA00F9).unwrap();
/// assert_eq!(id.priority(), 6);
/// assert_eq!(id.pdu_format(), 0xEA);
/// assert_eq!(id.source_address(), 0xF9);
/// assert!(CanId::new(0x2000_0000).is_err());
/// ```
pub struct CanId(u32);

impl CanId {
    /// Largest raw value an extended identifier can take.
    pub const MAX_RAW: u32 = 0x1FFF_FFFF;

    /// Wrap a raw value, rejecting anything above [`CanId::MAX_RAW`].
    pub fn new(raw: u32) -> Result<Self, CodecError> {
        validate_can_id(raw).map(Self)
    }

    /// Wrap a raw value, keeping only its lower 29 bits.
    #[inline]
    pub const fn from_raw_masked(raw: u32) -> Self {
        Self(raw & Self::MAX_RAW)
    }

    /// Underlying `u32`.
    #[inline]
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Priority (bits 26-28). 0 is the highest priority.
    #[inline]
    pub const fn priority(&self) -> u8 {
        decode(self.0).0
    }

    /// PDU Format (bits 16-23).
    #[inline]
    pub const fn pdu_format(&self) -> u8 {
        decode(self.0).1
    }

    /// PDU Specific (bits 8-15).
    #[inline]
    pub const fn pdu_specific(&self) -> u8 {
        decode(self.0).2
    }

    /// Source address (bits 0-7).
    #[inline]
    pub const fn source_address(&self) -> u8 {
        decode(self.0).3
    }

    /// Data page bit (bit 24). Not part of [`J1939Fields`].
    #[inline]
    pub const fn data_page(&self) -> bool {
        (self.0 >> 24) & 0x01 != 0
    }

    /// Extended data page bit (bit 25). Not part of [`J1939Fields`].
    #[inline]
    pub const fn extended_data_page(&self) -> bool {
        (self.0 >> 25) & 0x01 != 0
    }

    /// Decode into the four J1939 fields.
    #[inline]
    pub const fn fields(&self) -> J1939Fields {
        let (priority, pdu_format, pdu_specific, source_address) = decode(self.0);
        J1939Fields {
            priority,
            pdu_format,
            pdu_specific,
            source_address,
        }
    }
}

impl TryFrom<u32> for CanId {
    type Error = CodecError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<CanId> for u32 {
    #[inline]
    fn from(id: CanId) -> Self {
        id.raw()
    }
}

impl From<J1939Fields> for CanId {
    #[inline]
    fn from(fields: J1939Fields) -> Self {
        fields.encode()
    }
}

impl From<ExtendedId> for CanId {
    /// `ExtendedId` is bounded to 29 bits, so no check is needed.
    #[inline]
    fn from(id: ExtendedId) -> Self {
        Self::from_raw_masked(id.as_raw())
    }
}

impl From<CanId> for ExtendedId {
    fn from(id: CanId) -> Self {
        // `CanId` never holds more than 29 bits, the fallback is unreachable.
        ExtendedId::new(id.raw()).unwrap_or(ExtendedId::MAX)
    }
}

impl From<CanId> for Id {
    #[inline]
    fn from(id: CanId) -> Self {
        Id::Extended(id.into())
    }
}

//==================================================================================J1939_FIELDS
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// The four fields of a J1939 identifier, each within its declared width.
///
/// Byte-wide fields cannot overflow thanks to their `u8` type; the priority
/// is checked on construction.
pub struct J1939Fields {
    priority: u8,
    pdu_format: u8,
    pdu_specific: u8,
    source_address: u8,
}

impl J1939Fields {
    /// Build from typed values, rejecting a priority above 7.
    pub fn new(
        priority: u8,
        pdu_format: u8,
        pdu_specific: u8,
        source_address: u8,
    ) -> Result<Self, CodecError> {
        validate(Field::Priority, priority as u32)?;
        Ok(Self {
            priority,
            pdu_format,
            pdu_specific,
            source_address,
        })
    }

    /// Build from wide integers after running [`validate_fields`].
    pub fn try_from_raw(
        priority: u32,
        pdu_format: u32,
        pdu_specific: u32,
        source_address: u32,
    ) -> Result<Self, CodecError> {
        validate_fields(priority, pdu_format, pdu_specific, source_address)?;
        Ok(Self {
            priority: priority as u8,
            pdu_format: pdu_format as u8,
            pdu_specific: pdu_specific as u8,
            source_address: source_address as u8,
        })
    }

    /// Priority (3 bits, 0-7).
    #[inline]
    pub const fn priority(&self) -> u8 {
        self.priority
    }

    /// PDU Format.
    #[inline]
    pub const fn pdu_format(&self) -> u8 {
        self.pdu_format
    }

    /// PDU Specific: destination address or group extension.
    #[inline]
    pub const fn pdu_specific(&self) -> u8 {
        self.pdu_specific
    }

    /// Source address of the transmitting node.
    #[inline]
    pub const fn source_address(&self) -> u8 {
        self.source_address
    }

    /// Value of one packed field. `Field::CanId` yields the encoded identifier.
    pub const fn get(&self, field: Field) -> u32 {
        match field {
            Field::Priority => self.priority as u32,
            Field::PduFormat => self.pdu_format as u32,
            Field::PduSpecific => self.pdu_specific as u32,
            Field::SourceAddress => self.source_address as u32,
            Field::CanId => self.encode().raw(),
        }
    }

    /// Pack into a [`CanId`]. Cannot fail: every field already fits.
    #[inline]
    pub const fn encode(&self) -> CanId {
        CanId(encode(
            self.priority as u32,
            self.pdu_format as u32,
            self.pdu_specific as u32,
            self.source_address as u32,
        ))
    }

    /// Tuple form `(priority, pdu_format, pdu_specific, source_address)`.
    #[inline]
    pub const fn as_tuple(&self) -> (u8, u8, u8, u8) {
        (
            self.priority,
            self.pdu_format,
            self.pdu_specific,
            self.source_address,
        )
    }
}

impl From<CanId> for J1939Fields {
    #[inline]
    fn from(id: CanId) -> Self {
        id.fields()
    }
}

impl TryFrom<(u32, u32, u32, u32)> for J1939Fields {
    type Error = CodecError;

    fn try_from(
        (priority, pdu_format, pdu_specific, source_address): (u32, u32, u32, u32),
    ) -> Result<Self, Self::Error> {
        Self::try_from_raw(priority, pdu_format, pdu_specific, source_address)
    }
}
