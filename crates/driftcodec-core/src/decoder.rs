//! The record decoder and the `RecordDecoder` trait.
//!
//! Decoding is a single pass over a big-endian cursor: three 32-bit words
//! followed by two single bytes. Every extraction shifts first and masks
//! second, and all intermediates stay unsigned.

use crate::error::DecodeError;
use crate::layout::*;
use crate::record::{RawTelemetry, TelemetryRecord};
use bytes::Buf;

/// Anything that can turn one binary record into a [`TelemetryRecord`].
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so a single decoder can be shared
/// across Rayon workers and Tokio tasks without locking.
pub trait RecordDecoder: Send + Sync {
    /// Decode the record starting at byte 0 of `buf`.
    fn decode(&self, buf: &[u8]) -> Result<TelemetryRecord, DecodeError>;

    /// Number of bytes one record occupies.
    fn record_len(&self) -> usize {
        RECORD_LEN
    }
}

/// The 14-byte drifting-buoy layout decoder. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryDecoder;

impl TelemetryDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl RecordDecoder for TelemetryDecoder {
    fn decode(&self, buf: &[u8]) -> Result<TelemetryRecord, DecodeError> {
        decode(buf)
    }
}

/// Decode the record at the start of `buf`. Trailing bytes are ignored.
pub fn decode(buf: &[u8]) -> Result<TelemetryRecord, DecodeError> {
    decode_at(buf, 0)
}

/// Decode the record beginning at `offset` within `buf`.
pub fn decode_at(buf: &[u8], offset: usize) -> Result<TelemetryRecord, DecodeError> {
    decode_raw_at(buf, offset).map(|raw| raw.descale())
}

/// Extract the raw bit fields of the record at the start of `buf`.
pub fn decode_raw(buf: &[u8]) -> Result<RawTelemetry, DecodeError> {
    decode_raw_at(buf, 0)
}

/// Extract the raw bit fields of the record beginning at `offset`.
pub fn decode_raw_at(buf: &[u8], offset: usize) -> Result<RawTelemetry, DecodeError> {
    let record = record_slice(buf, offset)?;
    let mut cur = record;

    let time = cur.get_u32();
    let lat_word = cur.get_u32();
    let lon_word = cur.get_u32();
    let flags = cur.get_u8();
    let tail = cur.get_u8();
    debug_assert_eq!(
        record.len() - cur.remaining(),
        TAIL_OFFSET + 1,
        "cursor must consume exactly one record"
    );

    let sst_high = u16::from(flags & SST_HIGH_MASK);
    let sst_low = u16::from(tail >> SST_LOW_SHIFT);

    Ok(RawTelemetry {
        year_offset: ((time >> YEAR_SHIFT) & YEAR_MASK) as u8,
        month: ((time >> MONTH_SHIFT) & MONTH_MASK) as u8,
        day: ((time >> DAY_SHIFT) & DAY_MASK) as u8,
        seconds_past_day: time & SECONDS_MASK,
        lat_bits: lat_word >> LAT_SHIFT,
        lon_bits: (lon_word >> LON_SHIFT) & LON_MASK,
        submerged: (flags & SUBMERGED_BIT) != 0,
        gps_flag: (flags >> GPS_SHIFT) & GPS_MASK,
        sst_raw: (sst_high << SST_HIGH_SHIFT) | sst_low,
        battery_raw: tail & BATTERY_MASK,
    })
}

/// Borrow exactly one record's worth of bytes, or report how many were available.
fn record_slice(buf: &[u8], offset: usize) -> Result<&[u8], DecodeError> {
    let got = buf.len().saturating_sub(offset);
    if got < RECORD_LEN {
        return Err(DecodeError::TruncatedInput {
            needed: RECORD_LEN,
            got,
        });
    }
    Ok(&buf[offset..offset + RECORD_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2024-03-15 12:00:00, 45.5 N 123.25 W, afloat, gps=2, 12.34 °C, 11.0 V
    const PACIFIC_HEX: &str = "60dea8c0744cf300185abdc04d8c";

    fn bytes(s: &str) -> Vec<u8> {
        hex::decode(s).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn decode_all_zero() {
        let rec = decode(&[0u8; RECORD_LEN]).unwrap();
        assert_eq!(rec.year, 2000);
        assert_eq!(rec.month, 0);
        assert_eq!(rec.day, 0);
        assert_eq!(rec.seconds_past_day, 0);
        assert_eq!(rec.latitude, -90.0);
        assert_eq!(rec.longitude, -180.0);
        assert!(!rec.submerged);
        assert_eq!(rec.gps_flag, 0);
        assert_eq!(rec.sst, -5.0);
        assert_eq!(rec.battery_voltage, 5.0);
    }

    #[test]
    fn decode_all_ones() {
        let rec = decode(&[0xFFu8; RECORD_LEN]).unwrap();
        assert_eq!(rec.year, 2063);
        assert_eq!(rec.month, 15);
        assert_eq!(rec.day, 31);
        assert_eq!(rec.seconds_past_day, 131_071);
        assert!(close(rec.latitude, 1_073_741_823.0 / 3_600_000.0 - 90.0));
        assert!(close(rec.longitude, 2_147_483_647.0 / 3_600_000.0 - 180.0));
        assert!(rec.submerged);
        assert_eq!(rec.gps_flag, 3);
        assert!(close(rec.sst, 35.95));
        assert_eq!(rec.battery_voltage, 12.5);
    }

    #[test]
    fn decode_realistic_record() {
        let rec = decode(&bytes(PACIFIC_HEX)).unwrap();
        assert_eq!((rec.year, rec.month, rec.day), (2024, 3, 15));
        assert_eq!(rec.seconds_past_day, 43_200);
        assert!(close(rec.latitude, 45.5));
        assert!(close(rec.longitude, -123.25));
        assert!(!rec.submerged);
        assert_eq!(rec.gps_flag, 2);
        assert!(close(rec.sst, 12.34));
        assert_eq!(rec.battery_voltage, 11.0);
    }

    #[test]
    fn raw_fields_before_descaling() {
        let raw = decode_raw(&bytes(PACIFIC_HEX)).unwrap();
        assert_eq!(raw.year_offset, 24);
        assert_eq!(raw.lat_bits, 487_800_000);
        assert_eq!(raw.lon_bits, 204_300_000);
        assert_eq!(raw.sst_raw, 1734);
        assert_eq!(raw.battery_raw, 12);
    }

    #[test]
    fn sst_and_battery_share_tail_bits() {
        // Only bit 1 of byte 13 set: it is bit 0 of sst_raw and bit 1 of battery_raw.
        let mut buf = [0u8; RECORD_LEN];
        buf[TAIL_OFFSET] = 0b0000_0010;
        let raw = decode_raw(&buf).unwrap();
        assert_eq!(raw.sst_raw, 1);
        assert_eq!(raw.battery_raw, 2);
    }

    #[test]
    fn high_bits_are_not_sign_extended() {
        let mut buf = [0u8; RECORD_LEN];
        buf[LAT_OFFSET] = 0x80;
        buf[LON_OFFSET] = 0x80;
        let raw = decode_raw(&buf).unwrap();
        assert_eq!(raw.lat_bits, 0x2000_0000);
        assert_eq!(raw.lon_bits, 0x4000_0000);
    }

    #[test]
    fn short_input_is_truncated() {
        for len in 0..RECORD_LEN {
            let err = decode(&vec![0xAB; len]).unwrap_err();
            assert_eq!(
                err,
                DecodeError::TruncatedInput {
                    needed: RECORD_LEN,
                    got: len
                }
            );
        }
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut buf = bytes(PACIFIC_HEX);
        let expected = decode(&buf).unwrap();
        buf.extend_from_slice(&[0xFF; 5]);
        assert_eq!(decode(&buf).unwrap(), expected);
    }

    #[test]
    fn decode_at_offset() {
        let mut buf = vec![0xEE; 3];
        buf.extend(bytes(PACIFIC_HEX));
        let at = decode_at(&buf, 3).unwrap();
        assert_eq!(at, decode(&bytes(PACIFIC_HEX)).unwrap());
    }

    #[test]
    fn decode_at_past_end_is_truncated() {
        let buf = [0u8; RECORD_LEN];
        assert_eq!(
            decode_at(&buf, 1).unwrap_err(),
            DecodeError::TruncatedInput { needed: 14, got: 13 }
        );
        assert_eq!(
            decode_at(&buf, 100).unwrap_err(),
            DecodeError::TruncatedInput { needed: 14, got: 0 }
        );
    }

    #[test]
    fn trait_object_decodes() {
        let decoder: Box<dyn RecordDecoder> = Box::new(TelemetryDecoder::new());
        assert_eq!(decoder.record_len(), 14);
        assert_eq!(decoder.decode(&[0u8; 14]).unwrap().year, 2000);
    }
}
