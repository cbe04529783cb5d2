//! Hex-string input handling.
//!
//! Records usually arrive as hex text (HTTP bodies, CLI arguments, log
//! files). Conversion is lenient: it keeps the longest well-formed prefix and
//! never fails on its own, so malformed text reaches the decoder as a short
//! buffer and is reported as [`DecodeError::TruncatedInput`].

use crate::decoder::decode;
use crate::error::DecodeError;
use crate::record::TelemetryRecord;

/// Convert hex text into bytes, stopping at the first malformed pair.
///
/// Whitespace around the input and a leading `0x`/`0X` are ignored. A
/// dangling odd nibble is dropped.
pub fn parse_hex(s: &str) -> Vec<u8> {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    let pairs = s
        .as_bytes()
        .chunks_exact(2)
        .take_while(|pair| pair.iter().all(u8::is_ascii_hexdigit))
        .count();

    // The prefix is pure ASCII hex, so it always decodes.
    hex::decode(&s[..pairs * 2]).unwrap_or_default()
}

/// Parse `s` as hex and decode the resulting record.
pub fn decode_hex(s: &str) -> Result<TelemetryRecord, DecodeError> {
    decode(&parse_hex(s))
}
