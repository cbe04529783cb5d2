//! DriftCodec CLI: decode buoy telemetry records from the terminal.
//!
//! # Commands
//! ```text
//! driftcodec decode <HEX>... [--json] [--stdin]
//! driftcodec bench  --iterations <N> --threads <T>
//! driftcodec info
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use driftcodec_batch::{BatchEngine, BatchRequest};
use driftcodec_observability::{init_tracing, LogConfig};
use std::io::{self, BufRead};
use tracing::debug;

mod table;

#[derive(Parser)]
#[command(
    name = "driftcodec",
    about = "Drifting-buoy telemetry decoder (DriftCodec CLI)",
    long_about = "
DriftCodec CLI: decode 14-byte bit-packed buoy telemetry records given as hex.
Each record yields date, time, position, submersion and GPS flags, sea-surface
temperature and battery voltage. Records that fail to decode are reported on
stderr and do not stop the rest of the batch.
",
    version
)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode hex-encoded records and print them as a table
    Decode {
        /// Hex strings, one record each
        hex: Vec<String>,
        /// Print per-record JSON results instead of a table
        #[arg(long)]
        json: bool,
        /// Also read one hex string per line from standard input
        #[arg(long)]
        stdin: bool,
    },

    /// Benchmark decode throughput on synthetic records
    Bench {
        /// Number of records to decode
        #[arg(long, default_value_t = 1_000_000)]
        iterations: u64,
        /// Number of parallel Rayon threads (0 = use default)
        #[arg(long, default_value_t = 0)]
        threads: usize,
    },

    /// Show DriftCodec version and record layout
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig {
            level: "warn".into(),
            ..LogConfig::default()
        }
    };
    init_tracing(&log);

    match cli.command {
        Commands::Decode { hex, json, stdin } => cmd_decode(hex, json, stdin),
        Commands::Bench { iterations, threads } => cmd_bench(iterations, threads),
        Commands::Info => cmd_info(),
    }
}

// ─── Command implementations ─────────────────────────────────────────────────

fn cmd_decode(mut inputs: Vec<String>, as_json: bool, read_stdin: bool) -> Result<()> {
    if read_stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("read stdin")?;
            let line = line.trim();
            if !line.is_empty() {
                inputs.push(line.to_string());
            }
        }
    }

    let result = BatchEngine::new().decode(BatchRequest::new(inputs))?;
    debug!(
        total = result.total_input,
        decoded = result.decoded_count(),
        errors = result.error_count(),
        "decode batch complete"
    );

    table::write_output(&result, as_json, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(())
}

fn cmd_bench(iterations: u64, threads: usize) -> Result<()> {
    use std::time::Instant;

    let batch: Vec<String> = (0..iterations)
        .map(|i| {
            let mut buf = [0u8; 14];
            buf[..8].copy_from_slice(&i.to_be_bytes());
            buf[8..12].copy_from_slice(&(i as u32).rotate_left(7).to_be_bytes());
            buf[12] = (i & 0xFF) as u8;
            buf[13] = ((i >> 3) & 0xFF) as u8;
            hex::encode(buf)
        })
        .collect();

    println!("Benchmarking: {} records ...", iterations);

    let start = Instant::now();
    let result = BatchEngine::new().decode(BatchRequest::new(batch).concurrency(threads))?;
    let elapsed = start.elapsed();
    debug!(iterations, threads, elapsed_ms = elapsed.as_millis() as u64, "bench finished");

    let total = iterations;
    let success = result.decoded_count() as u64;
    let throughput = total as f64 / elapsed.as_secs_f64();

    println!("Results:");
    println!("  Total:      {} records", total);
    println!("  Decoded:    {}", success);
    println!("  Errors:     {}", result.error_count());
    println!("  Duration:   {:.3}s", elapsed.as_secs_f64());
    println!("  Throughput: {:.0} records/sec", throughput);
    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("DriftCodec v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Record layout ({} bytes, big-endian):", driftcodec_core::RECORD_LEN);
    println!("  bytes  0..4   year(6) month(4) day(5) seconds-past-day(17)");
    println!("  bytes  4..8   latitude(30)  deg = raw / 3600000 - 90");
    println!("  bytes  8..12  longitude(31) deg = raw / 3600000 - 180");
    println!("  byte   12     submerged(1) gps-flag(2) sst-high(5)");
    println!("  byte   13     sst-low(7, bits 7..1) battery(4, bits 3..0)");
    println!("                sst  = raw * 0.01 - 5.0 °C");
    println!("                batt = raw / 2 + 5 V");
    println!();
    println!("Server:        driftcodec-server  (POST /parse-hex)");
    Ok(())
}
