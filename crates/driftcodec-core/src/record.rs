//! Raw and de-scaled representations of one telemetry record.

use crate::layout::{
    BATTERY_DIVISOR, BATTERY_OFFSET, LAT_OFFSET_DEG, LON_OFFSET_DEG, POSITION_SCALE, SST_OFFSET,
    SST_SCALE, YEAR_BASE,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bit fields exactly as extracted from the record, before de-scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RawTelemetry {
    /// Years since 2000 (6 bits)
    pub year_offset: u8,
    /// 4 bits, not guaranteed to be 1..=12
    pub month: u8,
    /// 5 bits
    pub day: u8,
    /// 17 bits
    pub seconds_past_day: u32,
    /// 30-bit latitude in milli-arcseconds, offset by +90°
    pub lat_bits: u32,
    /// 31-bit longitude in milli-arcseconds, offset by +180°
    pub lon_bits: u32,
    pub submerged: bool,
    /// 2 bits
    pub gps_flag: u8,
    /// 12-bit SST in hundredths of a degree, offset by +5 °C
    pub sst_raw: u16,
    /// 4-bit battery level in half-volt steps above 5 V
    pub battery_raw: u8,
}

impl RawTelemetry {
    /// Apply the linear de-scaling formulas to every field.
    pub fn descale(&self) -> TelemetryRecord {
        TelemetryRecord {
            year: YEAR_BASE + u16::from(self.year_offset),
            month: self.month,
            day: self.day,
            seconds_past_day: self.seconds_past_day,
            latitude: f64::from(self.lat_bits) / POSITION_SCALE - LAT_OFFSET_DEG,
            longitude: f64::from(self.lon_bits) / POSITION_SCALE - LON_OFFSET_DEG,
            submerged: self.submerged,
            gps_flag: self.gps_flag,
            sst: f64::from(self.sst_raw) * SST_SCALE + SST_OFFSET,
            battery_voltage: f64::from(self.battery_raw) / BATTERY_DIVISOR + BATTERY_OFFSET,
        }
    }
}

/// A fully decoded telemetry record.
///
/// Serialises with the PascalCase keys used on the wire by the batch
/// endpoint (`Year`, `GPSFlag`, `SST`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    #[serde(rename = "Year")]
    pub year: u16,
    #[serde(rename = "Month")]
    pub month: u8,
    #[serde(rename = "Day")]
    pub day: u8,
    #[serde(rename = "SecondsPastDay")]
    pub seconds_past_day: u32,
    /// Degrees
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    /// Degrees
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Submerged")]
    pub submerged: bool,
    #[serde(rename = "GPSFlag")]
    pub gps_flag: u8,
    /// Sea-surface temperature, °C
    #[serde(rename = "SST")]
    pub sst: f64,
    /// Volts
    #[serde(rename = "BatteryVoltage")]
    pub battery_voltage: f64,
}

impl TelemetryRecord {
    /// Interpret the date and time fields as a calendar timestamp.
    ///
    /// Returns `None` when the raw month/day do not name a real date or the
    /// seconds count runs past the end of the day. Decoding never depends on
    /// this; it is a convenience for consumers that want a `chrono` value.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )?;
        let time = NaiveTime::from_num_seconds_from_midnight_opt(self.seconds_past_day, 0)?;
        Some(date.and_time(time))
    }
}

impl fmt::Display for TelemetryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} +{}s lat={:.7} lon={:.7} submerged={} gps={} sst={:.2} battery={:.1}",
            self.year,
            self.month,
            self.day,
            self.seconds_past_day,
            self.latitude,
            self.longitude,
            u8::from(self.submerged),
            self.gps_flag,
            self.sst,
            self.battery_voltage,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TelemetryRecord {
        RawTelemetry {
            year_offset: 24,
            month: 3,
            day: 15,
            seconds_past_day: 43_200,
            lat_bits: 487_800_000,
            lon_bits: 204_300_000,
            submerged: false,
            gps_flag: 2,
            sst_raw: 1734,
            battery_raw: 12,
        }
        .descale()
    }

    #[test]
    fn descale_default_is_lower_bound() {
        let rec = RawTelemetry::default().descale();
        assert_eq!(rec.year, 2000);
        assert_eq!(rec.latitude, -90.0);
        assert_eq!(rec.longitude, -180.0);
        assert_eq!(rec.sst, -5.0);
        assert_eq!(rec.battery_voltage, 5.0);
    }

    #[test]
    fn descale_sample() {
        let rec = sample();
        assert_eq!(rec.year, 2024);
        assert!((rec.latitude - 45.5).abs() < 1e-9);
        assert!((rec.longitude - -123.25).abs() < 1e-9);
        assert!((rec.sst - 12.34).abs() < 1e-9);
        assert_eq!(rec.battery_voltage, 11.0);
    }

    #[test]
    fn serializes_with_wire_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "Year",
            "Month",
            "Day",
            "SecondsPastDay",
            "Latitude",
            "Longitude",
            "Submerged",
            "GPSFlag",
            "SST",
            "BatteryVoltage",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 10);
        assert_eq!(json["GPSFlag"], 2);
        assert_eq!(json["Submerged"], false);
    }

    #[test]
    fn timestamp_for_valid_date() {
        let ts = sample().timestamp().unwrap();
        assert_eq!(ts.to_string(), "2024-03-15 12:00:00");
    }

    #[test]
    fn timestamp_rejects_raw_out_of_range_values() {
        let mut rec = sample();
        rec.month = 0;
        assert!(rec.timestamp().is_none());

        let mut rec = sample();
        rec.seconds_past_day = 86_400;
        assert!(rec.timestamp().is_none());
    }

    #[test]
    fn display_is_single_line() {
        let s = sample().to_string();
        assert!(s.starts_with("2024-03-15 +43200s lat=45.5000000"));
        assert!(s.ends_with("sst=12.34 battery=11.0"));
    }
}
