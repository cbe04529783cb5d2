//! Fixed-column table rendering for decoded records.

use driftcodec_batch::BatchResult;
use driftcodec_core::TelemetryRecord;
use std::io::{self, Write};

pub const HEADER: &str = "| Year | Month | Day | Seconds Past Day | Latitude     | Longitude     | Submerged | GPS Flags | SST    | Battery Voltage |";
pub const SEPARATOR: &str = "|------|-------|-----|------------------|--------------|---------------|-----------|-----------|--------|-----------------|";

/// Render one record as a table row aligned with [`HEADER`].
pub fn format_row(rec: &TelemetryRecord) -> String {
    format!(
        "| {:<4} | {:<5} | {:<3} | {:<16} | {:<12.7} | {:<13.7} | {:<9} | {:<9} | {:<6.2} | {:<15.1} |",
        rec.year,
        rec.month,
        rec.day,
        rec.seconds_past_day,
        rec.latitude,
        rec.longitude,
        u8::from(rec.submerged),
        rec.gps_flag,
        rec.sst,
        rec.battery_voltage,
    )
}

/// Write the header and one row per decoded record to `out`; failures go to `err`.
pub fn write_table(result: &BatchResult, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{SEPARATOR}")?;
    for item in &result.items {
        match &item.outcome {
            Ok(rec) => writeln!(out, "{}", format_row(rec))?,
            Err(e) => writeln!(err, "Error parsing hex string \"{}\": {}", item.input, e)?,
        }
    }
    Ok(())
}

/// Write a decoded batch as pretty JSON or as a table, as `decode` prints it.
pub fn write_output(
    result: &BatchResult,
    as_json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    if as_json {
        serde_json::to_writer_pretty(&mut *out, &result.items)?;
        return writeln!(out);
    }
    if result.total_input == 0 {
        writeln!(out, "No Valid Hex Strings")?;
    }
    write_table(result, out, err)
}
