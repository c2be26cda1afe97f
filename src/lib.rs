//! `j1939-id` library: encoding and decoding of SAE J1939 29-bit CAN
//! identifiers in a `no_std` environment. The crate exposes the shared field
//! vocabulary, the identifier codec with its validation layer, and the
//! textual interchange used by command-line front ends.
#![cfg_attr(not(feature = "std"), no_std)]
//==================================================================================
/// Field descriptors and operation names shared by the codec and its callers.
pub mod core;
/// Range and input errors raised around the codec.
pub mod error;
/// Textual interchange (auto-base number parsing, hex rendering).
pub mod infra;
/// J1939 identifier codec: raw bit packing, validation, typed wrappers.
pub mod protocol;
//==================================================================================
pub use crate::core::{Field, Operation};
pub use crate::error::{CodecError, InputErrorKind};
pub use crate::protocol::transport::can_id::{
    decode, encode, validate_can_id, validate_fields, CanId, J1939Fields,
};
