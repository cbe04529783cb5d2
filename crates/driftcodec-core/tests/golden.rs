//! Golden vector tests.
//!
//! Each entry in `fixtures/vectors.json` pairs a hex-encoded record with the
//! field values it must decode to.

use driftcodec_core::{decode, decode_hex, DecodeError, TelemetryRecord};
use serde::Deserialize;

// ─── Helpers ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct Vector {
    name: String,
    hex: String,
    expected: TelemetryRecord,
}

/// The fixtures live two levels above the crate root.
fn fixture_path(name: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures");
    p.push(name);
    p
}

fn load_vectors() -> Vec<Vector> {
    let json = std::fs::read_to_string(fixture_path("vectors.json")).expect("fixture not found");
    serde_json::from_str(&json).expect("parse vectors.json")
}

fn assert_close(name: &str, field: &str, got: f64, want: f64) {
    assert!(
        (got - want).abs() < 1e-7,
        "{name}: {field} = {got}, expected {want}"
    );
}

fn assert_matches(name: &str, got: &TelemetryRecord, want: &TelemetryRecord) {
    assert_eq!(got.year, want.year, "{name}: Year");
    assert_eq!(got.month, want.month, "{name}: Month");
    assert_eq!(got.day, want.day, "{name}: Day");
    assert_eq!(got.seconds_past_day, want.seconds_past_day, "{name}: SecondsPastDay");
    assert_eq!(got.submerged, want.submerged, "{name}: Submerged");
    assert_eq!(got.gps_flag, want.gps_flag, "{name}: GPSFlag");
    assert_close(name, "Latitude", got.latitude, want.latitude);
    assert_close(name, "Longitude", got.longitude, want.longitude);
    assert_close(name, "SST", got.sst, want.sst);
    assert_close(name, "BatteryVoltage", got.battery_voltage, want.battery_voltage);
}

// ─── Golden vectors ───────────────────────────────────────────────────────────

#[test]
fn all_vectors_decode() {
    let vectors = load_vectors();
    assert!(vectors.len() >= 4);
    for v in &vectors {
        let got = decode_hex(&v.hex).unwrap_or_else(|e| panic!("{}: {e}", v.name));
        assert_matches(&v.name, &got, &v.expected);
    }
}

#[test]
fn vectors_are_exactly_one_record() {
    for v in load_vectors() {
        let bytes = hex::decode(&v.hex).unwrap();
        assert_eq!(bytes.len(), 14, "{}", v.name);
    }
}

#[test]
fn every_prefix_of_a_vector_is_truncated() {
    for v in load_vectors() {
        let bytes = hex::decode(&v.hex).unwrap();
        for len in 0..bytes.len() {
            match decode(&bytes[..len]) {
                Err(DecodeError::TruncatedInput { needed: 14, got }) => assert_eq!(got, len),
                other => panic!("{}: prefix {len} gave {other:?}", v.name),
            }
        }
    }
}

#[test]
fn json_output_uses_wire_keys() {
    let rec = decode_hex("60dea8c0744cf300185abdc04d8c").unwrap();
    let json = serde_json::to_value(rec).unwrap();
    assert_eq!(json["Year"], 2024);
    assert_eq!(json["SecondsPastDay"], 43200);
    assert_eq!(json["BatteryVoltage"], 11.0);
}
