//! # J1939 Calculator
//!
//! Interactive front end for the identifier codec:
//! - `j2u`: prompt for priority, PDU Format, PDU Specific and Source Address,
//!   print the packed CAN ID
//! - `u2j`: prompt for a CAN ID, print the four decoded fields
//!
//! Numbers may be typed in decimal or with a `0x` prefix.
//!
//! ```bash
//! cargo run --features std --example j1939_calculator -- j2u
//! cargo run --features std --example j1939_calculator -- u2j
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use j1939_id::infra::text::parse_field;
use j1939_id::{CanId, CodecError, Field, J1939Fields, Operation};
use thiserror::Error;

/// Failures surfaced to the user: codec rejections or terminal I/O.
#[derive(Debug, Error)]
enum CliError {
    #[error("Invalid input: {0}")]
    Codec(#[from] CodecError),
    #[error("An error occurred: {0}")]
    Io(#[from] io::Error),
}

/// Print `label` and read one line from `input`.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"));
    }
    Ok(line)
}

/// Prompt for a single field and check its range right away.
fn prompt_field(input: &mut impl BufRead, field: Field) -> Result<u32, CliError> {
    let line = prompt(input, field.prompt())?;
    Ok(parse_field(field, &line)?)
}

fn encode_mode(input: &mut impl BufRead) -> Result<(), CliError> {
    let mut values = [0u32; 4];
    for (slot, field) in values.iter_mut().zip(Field::PACKED) {
        *slot = prompt_field(input, field)?;
    }
    let [priority, pdu_format, pdu_specific, source_address] = values;
    let fields = J1939Fields::try_from_raw(priority, pdu_format, pdu_specific, source_address)?;

    println!("\nEncoded CAN ID: {}", fields.encode());
    Ok(())
}

fn decode_mode(input: &mut impl BufRead) -> Result<(), CliError> {
    let raw = prompt_field(input, Field::CanId)?;
    let id = CanId::new(raw)?;

    println!("\nDecoded J1939 Fields:");
    for line in id.fields().to_string().lines() {
        println!("  {line}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let Some(mode) = std::env::args().nth(1) else {
        eprintln!("usage: j1939_calculator <j2u|u2j>");
        return ExitCode::from(2);
    };
    let operation = match mode.parse::<Operation>() {
        Ok(operation) => operation,
        Err(_) => {
            eprintln!(
                "unknown mode '{mode}': expected '{}' (J1939 to uint32) or '{}' (uint32 to J1939)",
                Operation::Encode,
                Operation::Decode
            );
            return ExitCode::from(2);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let outcome = match operation {
        Operation::Encode => encode_mode(&mut input),
        Operation::Decode => decode_mode(&mut input),
    };

    // Rejected input is reported, not treated as a failed run.
    if let Err(err) = outcome {
        println!("{err}");
    }
    ExitCode::SUCCESS
}
