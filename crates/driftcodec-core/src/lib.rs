//! # driftcodec-core
//!
//! Decoder for the 14-byte bit-packed telemetry record transmitted by
//! drifting buoys over Argos-style links. A record carries a date and time,
//! a position, a submersion flag, a GPS quality flag, sea-surface
//! temperature and battery voltage.
//!
//! Decoding is pure arithmetic on unsigned words and never validates
//! physical plausibility. The only failure is a buffer shorter than
//! [`RECORD_LEN`] bytes.
//!
//! ```
//! use driftcodec_core::decode_hex;
//!
//! let rec = decode_hex("60dea8c0744cf300185abdc04d8c").unwrap();
//! assert_eq!(rec.year, 2024);
//! assert_eq!(rec.battery_voltage, 11.0);
//! ```

pub mod decoder;
pub mod error;
pub mod input;
pub mod layout;
pub mod record;

pub use decoder::{decode, decode_at, decode_raw, decode_raw_at, RecordDecoder, TelemetryDecoder};
pub use error::{BatchDecodeError, DecodeError};
pub use input::{decode_hex, parse_hex};
pub use layout::RECORD_LEN;
pub use record::{RawTelemetry, TelemetryRecord};
