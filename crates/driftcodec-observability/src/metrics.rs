//! DriftCodec metrics definitions.
//!
//! All metrics use OpenTelemetry conventions and are no-ops until a meter
//! provider is installed globally.

use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
    KeyValue,
};

/// Central metrics handle for DriftCodec.
#[derive(Clone)]
pub struct DecodeMetrics {
    pub records_decoded: Counter<u64>,
    pub decode_errors: Counter<u64>,
    pub batch_latency_ms: Histogram<f64>,
    pub batch_size: Histogram<u64>,
}

impl Default for DecodeMetrics {
    fn default() -> Self {
        Self::new(&global::meter("driftcodec"))
    }
}

impl DecodeMetrics {
    pub fn new(meter: &Meter) -> Self {
        Self {
            records_decoded: meter
                .u64_counter("driftcodec.records_decoded")
                .with_description("Total number of successfully decoded records")
                .build(),
            decode_errors: meter
                .u64_counter("driftcodec.decode_errors")
                .with_description("Records that failed to decode")
                .build(),
            batch_latency_ms: meter
                .f64_histogram("driftcodec.batch_latency_ms")
                .with_description("Time to decode one batch in milliseconds")
                .build(),
            batch_size: meter
                .u64_histogram("driftcodec.batch_size")
                .with_description("Number of records in a batch decode request")
                .build(),
        }
    }

    pub fn record_decoded(&self, count: u64) {
        self.records_decoded.add(count, &[]);
    }

    pub fn record_error(&self, error_type: &str) {
        self.record_errors(1, error_type);
    }

    /// Add `count` failures of one kind in a single counter update.
    pub fn record_errors(&self, count: u64, error_type: &str) {
        if count == 0 {
            return;
        }
        self.decode_errors
            .add(count, &[KeyValue::new("error_type", error_type.to_string())]);
    }

    pub fn record_batch(&self, size: u64, ms: f64) {
        self.batch_size.record(size, &[]);
        self.batch_latency_ms.record(ms, &[]);
    }
}
