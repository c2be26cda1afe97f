//! Textual interchange as a command-line front end would use it.
use j1939_id::infra::text::{parse_field, parse_u32};
use j1939_id::{CanId, CodecError, Field, InputErrorKind, J1939Fields, Operation};

#[test]
fn encode_session_from_prompts() {
    let answers = ["6", "0xEA", "0x00", "0xF9"];
    let mut values = [0u32; 4];
    for ((slot, field), text) in values.iter_mut().zip(Field::PACKED).zip(answers) {
        *slot = parse_field(field, text).unwrap();
    }
    let [p, pf, ps, sa] = values;
    let id = J1939Fields::try_from_raw(p, pf, ps, sa).unwrap().encode();
    assert_eq!(format!("Encoded CAN ID: {id}"), "Encoded CAN ID: 0x18EA00F9");
}

#[test]
fn decode_session_from_prompt() {
    let id: CanId = "0x18EA00F9".parse().unwrap();
    let rendered = id.fields().to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        [
            "Priority: 6 (0x6)",
            "PDU Format (PF): 234 (0xEA)",
            "PDU Specific (PS): 0 (0x00)",
            "Source Address (SA): 249 (0xF9)",
        ]
    );
}

#[test]
fn displayed_id_parses_back() {
    for raw in [0, 1, 0x00FF_00FF, 0x18EA00F9, CanId::MAX_RAW] {
        let id = CanId::new(raw).unwrap();
        assert_eq!(id.to_string().parse::<CanId>().unwrap(), id);
    }
}

#[test]
fn operations_follow_mode_names() {
    assert_eq!("j2u".parse::<Operation>().unwrap(), Operation::Encode);
    assert_eq!("u2j".parse::<Operation>().unwrap(), Operation::Decode);
    assert_eq!(Operation::Encode.to_string(), "j2u");
    assert_eq!(
        "x2y".parse::<Operation>(),
        Err(CodecError::InvalidInput {
            reason: InputErrorKind::UnknownOperation
        })
    );
}

#[test]
fn malformed_text_is_invalid_input_not_out_of_range() {
    let err = parse_u32("0xZZ").unwrap_err();
    assert!(matches!(err, CodecError::InvalidInput { .. }));
    assert_eq!(err.field(), None);
    assert_eq!(err.to_string(), "invalid digit");

    let err = parse_field(Field::Priority, "9").unwrap_err();
    assert_eq!(err.field(), Some(Field::Priority));
    assert_eq!(err.to_string(), "Priority must be between 0 and 7, got 9");
}

#[test]
fn signed_prompt_answers() {
    assert_eq!(parse_field(Field::PduFormat, "+0xEA").unwrap(), 0xEA);
    let err = parse_field(Field::Priority, "-1").unwrap_err();
    assert_eq!(
        err,
        CodecError::OutOfRange {
            field: Field::Priority,
            value: -1
        }
    );
    assert_eq!(err.min(), Some(0));
    assert_eq!(err.max(), Some(7));
}

/// Front-end error wrapping a codec rejection, as the calculator does.
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
enum FrontEndError {
    #[error("Invalid input: {0}")]
    Codec(#[from] CodecError),
    #[error("An error occurred: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "std")]
#[test]
fn codec_error_wraps_as_std_error_source() {
    use std::error::Error as _;

    let err: FrontEndError = parse_field(Field::Priority, "9").unwrap_err().into();
    assert_eq!(
        err.to_string(),
        "Invalid input: Priority must be between 0 and 7, got 9"
    );
    assert!(err.source().is_some());

    let err: FrontEndError = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no input").into();
    assert_eq!(err.to_string(), "An error occurred: no input");
}
