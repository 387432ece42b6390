//! Response framing for register reads and writes.
//!
//! The agent wraps every string value in one boundary byte on each side.
//! Once those are stripped, a register read answers with a two-line frame
//! and a register write answers with a fixed acknowledgement literal.

use crate::constants::*;
use crate::error::{CounterError, Result};
use crate::labels::escape_bytes;
use regex::Regex;
use std::sync::LazyLock;

/// Second line of a read frame: 4 hex digits (ignored), 2 hex digits (the byte)
static DATA_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^EE:[0-9A-F]{4}([0-9A-F]{2});$").expect("valid frame pattern")
});

/// Remove the single leading and trailing boundary byte
pub fn strip_boundary(raw: &[u8]) -> Result<&[u8]> {
    if raw.len() < 2 {
        return Err(CounterError::MalformedResponse(format!(
            "octet string too short to carry boundary bytes: \"{}\"",
            escape_bytes(raw)
        )));
    }
    Ok(&raw[1..raw.len() - 1])
}

/// Interpret stripped response bytes as ASCII text
pub fn decode_ascii(data: &[u8]) -> Result<String> {
    if !data.is_ascii() {
        return Err(CounterError::MalformedResponse(format!(
            "response is not ASCII: \"{}\"",
            escape_bytes(data)
        )));
    }
    // ASCII is always valid UTF-8
    Ok(data.iter().map(|&b| b as char).collect())
}

/// Validate a register read frame and extract the returned byte
pub fn decode_read_frame(text: &str) -> Result<u8> {
    let mismatch = || CounterError::FrameMismatch {
        raw: escape_bytes(text.as_bytes()),
    };

    let lines: Vec<&str> = text.split(FRAME_LINE_SEPARATOR).collect();
    if lines.len() < 2 || lines[0] != READ_FRAME_HEADER {
        return Err(mismatch());
    }

    let captures = DATA_LINE.captures(lines[1]).ok_or_else(mismatch)?;
    u8::from_str_radix(&captures[1], 16).map_err(|_| mismatch())
}

/// Check a register write response against the acknowledgement literal
pub fn check_ack(text: &str) -> Result<()> {
    if text == WRITE_ACK {
        Ok(())
    } else {
        Err(CounterError::WriteNotAcknowledged {
            context: String::new(),
            response: escape_bytes(text.as_bytes()),
        })
    }
}
