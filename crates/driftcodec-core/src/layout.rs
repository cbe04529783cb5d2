//! Bit layout of the 14-byte telemetry record.
//!
//! ```text
//! byte  0..4   T   yyyyyymm mmdddddS SSSSSSSS SSSSSSSS   year/month/day/seconds
//! byte  4..8   L1  30-bit latitude, 2 trailing pad bits
//! byte  8..12  L2  31-bit longitude, 1 trailing pad bit
//! byte 12      F   submerged(1) gps(2) sst[11..7](5)
//! byte 13      N   sst[6..0](7) in bits 7..1, battery(4) in bits 3..0
//! ```
//!
//! Bits 3..1 of byte 13 are read by both the SST and the battery fields.

/// Size of one encoded record in bytes.
pub const RECORD_LEN: usize = 14;

pub const TIME_OFFSET: usize = 0;
pub const LAT_OFFSET: usize = 4;
pub const LON_OFFSET: usize = 8;
pub const FLAGS_OFFSET: usize = 12;
pub const TAIL_OFFSET: usize = 13;

// ─── Time word ───────────────────────────────────────────────────────────────

pub const YEAR_SHIFT: u32 = 26;
pub const YEAR_MASK: u32 = 0x3F;
pub const YEAR_BASE: u16 = 2000;

pub const MONTH_SHIFT: u32 = 22;
pub const MONTH_MASK: u32 = 0xF;

pub const DAY_SHIFT: u32 = 17;
pub const DAY_MASK: u32 = 0x1F;

pub const SECONDS_MASK: u32 = 0x1_FFFF;

// ─── Position words ──────────────────────────────────────────────────────────

pub const LAT_SHIFT: u32 = 2;
pub const LON_SHIFT: u32 = 1;
pub const LON_MASK: u32 = 0x7FFF_FFFF;

/// Position fields are stored in milli-arcseconds.
pub const POSITION_SCALE: f64 = 3_600_000.0;
pub const LAT_OFFSET_DEG: f64 = 90.0;
pub const LON_OFFSET_DEG: f64 = 180.0;

// ─── Flags byte ──────────────────────────────────────────────────────────────

pub const SUBMERGED_BIT: u8 = 0x80;
pub const GPS_SHIFT: u32 = 5;
pub const GPS_MASK: u8 = 0x3;
pub const SST_HIGH_MASK: u8 = 0x1F;

// ─── Tail byte ───────────────────────────────────────────────────────────────

pub const SST_LOW_SHIFT: u32 = 1;
pub const SST_HIGH_SHIFT: u32 = 7;
pub const BATTERY_MASK: u8 = 0xF;

pub const SST_SCALE: f64 = 0.01;
pub const SST_OFFSET: f64 = -5.0;

pub const BATTERY_DIVISOR: f64 = 2.0;
pub const BATTERY_OFFSET: f64 = 5.0;
