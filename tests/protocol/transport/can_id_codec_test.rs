//! End-to-end checks of the identifier codec through the public API.
use j1939_id::protocol::transport::can_id::{decode, encode, validate_can_id, validate_fields};
use j1939_id::{CanId, CodecError, Field, J1939Fields};

/// A few identifiers seen on real J1939 buses: request, address claim,
/// EEC1, and a proprietary broadcast.
const KNOWN_IDS: [(u32, (u8, u8, u8, u8)); 4] = [
    (0x18EA00F9, (6, 0xEA, 0x00, 0xF9)),
    (0x18EEFF1C, (6, 0xEE, 0xFF, 0x1C)),
    (0x0CF00400, (3, 0xF0, 0x04, 0x00)),
    (0x1CFF4A80, (7, 0xFF, 0x4A, 0x80)),
];

#[test]
fn known_ids_decode_and_encode() {
    for (raw, tuple) in KNOWN_IDS {
        assert_eq!(decode(raw), tuple, "decode 0x{raw:08X}");
        let (p, pf, ps, sa) = tuple;
        assert_eq!(encode(p as u32, pf as u32, ps as u32, sa as u32), raw);

        let id = CanId::new(raw).expect("known ids are 29-bit");
        assert_eq!(id.fields().as_tuple(), tuple);
        assert_eq!(J1939Fields::new(p, pf, ps, sa).unwrap().encode(), id);
    }
}

#[test]
fn every_source_address_round_trips() {
    for priority in 0..=7u8 {
        for source_address in 0..=255u8 {
            let fields = J1939Fields::new(priority, 0xFE, 0xF1, source_address).unwrap();
            assert_eq!(CanId::from(fields).fields(), fields);
        }
    }
}

#[test]
fn validated_ids_round_trip_through_fields() {
    let mut raw = 0u32;
    while raw <= CanId::MAX_RAW {
        let id = CanId::new(raw & !0x0300_0000).unwrap();
        assert_eq!(J1939Fields::from(id).encode(), id);
        raw += 0x0001_3579;
    }
}

#[test]
fn masking_matches_field_modulus() {
    for field in Field::PACKED {
        let modulus = field.max() + 1;
        let mut args = [1u32, 2, 3, 4];
        let base = encode(args[0], args[1], args[2], args[3]);
        let index = Field::PACKED.iter().position(|f| *f == field).unwrap();
        args[index] += modulus;
        assert_eq!(encode(args[0], args[1], args[2], args[3]), base, "{field}");
    }
}

#[test]
fn validation_gates_both_directions() {
    assert!(matches!(
        validate_fields(8, 0, 0, 0),
        Err(CodecError::OutOfRange {
            field: Field::Priority,
            value: 8
        })
    ));
    assert!(validate_fields(0, 0, 0, 0).is_ok());
    assert!(validate_can_id(0x1FFF_FFFF).is_ok());
    assert!(matches!(
        validate_can_id(0x2000_0000),
        Err(CodecError::OutOfRange {
            field: Field::CanId,
            value: 0x2000_0000
        })
    ));
}

#[test]
fn out_of_range_message_names_field_and_bounds() {
    let err = validate_fields(0, 256, 0, 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "PDU Format must be between 0 and 255, got 256"
    );
    let err = validate_can_id(0x2000_0000).unwrap_err();
    assert_eq!(
        err.to_string(),
        "CAN ID must be between 0 and 536870911, got 536870912"
    );
}

#[test]
fn codec_is_usable_across_threads() {
    let handles: Vec<_> = (0..4u32)
        .map(|priority| {
            std::thread::spawn(move || {
                (0..=255u32)
                    .map(|sa| encode(priority, 0xEA, 0x00, sa))
                    .all(|raw| decode(raw).0 as u32 == priority)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
