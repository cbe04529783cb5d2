//! `BatchEngine`: orchestrates chunked, parallel batch decoding.

use crate::request::{BatchRequest, ErrorMode};
use driftcodec_core::{
    decoder::{RecordDecoder, TelemetryDecoder},
    error::{BatchDecodeError, DecodeError},
    input::parse_hex,
    record::TelemetryRecord,
};
use rayon::prelude::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome for one input of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem {
    /// Position of the input in the request
    pub index: usize,
    /// The hex string exactly as submitted
    pub input: String,
    pub outcome: Result<TelemetryRecord, DecodeError>,
}

impl BatchItem {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Serialises as `{"hexString": ..., "parsedData": {...}}` on success and
/// `{"hexString": ..., "error": "..."}` on failure.
impl Serialize for BatchItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("hexString", &self.input)?;
        match &self.outcome {
            Ok(record) => map.serialize_entry("parsedData", record)?,
            Err(err) => map.serialize_entry("error", &err.to_string())?,
        }
        map.end()
    }
}

/// Result of a batch decode job.
#[derive(Debug)]
pub struct BatchResult {
    /// Items in input order (failed items are absent in Skip mode)
    pub items: Vec<BatchItem>,
    /// Total inputs processed
    pub total_input: usize,
}

impl BatchResult {
    pub fn decoded_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_ok()).count()
    }

    pub fn error_count(&self) -> usize {
        self.items.len() - self.decoded_count()
    }

    /// Successfully decoded records, in input order.
    pub fn records(&self) -> impl Iterator<Item = &TelemetryRecord> {
        self.items.iter().filter_map(|i| i.outcome.as_ref().ok())
    }
}

/// Batch decode engine.
pub struct BatchEngine {
    decoder: Arc<dyn RecordDecoder>,
}

impl Default for BatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchEngine {
    /// Engine backed by the standard 14-byte telemetry decoder.
    pub fn new() -> Self {
        Self::with_decoder(Arc::new(TelemetryDecoder::new()))
    }

    pub fn with_decoder(decoder: Arc<dyn RecordDecoder>) -> Self {
        Self { decoder }
    }

    /// Parse and decode a single hex input.
    pub fn decode_one(&self, input: &str) -> Result<TelemetryRecord, DecodeError> {
        self.decoder.decode(&parse_hex(input))
    }

    /// Execute a batch decode request.
    pub fn decode(&self, req: BatchRequest) -> Result<BatchResult, BatchDecodeError> {
        if req.concurrency > 0 && req.parallel {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(req.concurrency)
                .build()
                .map_err(|e| BatchDecodeError::Other(format!("thread pool: {e}")))?;
            pool.install(|| self.run(req))
        } else {
            self.run(req)
        }
    }

    fn run(&self, req: BatchRequest) -> Result<BatchResult, BatchDecodeError> {
        let total_input = req.inputs.len();
        let chunk_size = req.chunk_size.max(1);
        info!(
            "BatchEngine: decoding {} records (chunk_size={}, mode={:?})",
            total_input, chunk_size, req.error_mode
        );

        let mut items: Vec<BatchItem> = Vec::with_capacity(total_input);
        let mut global_offset = 0usize;

        for chunk in req.inputs.chunks(chunk_size) {
            let outcomes: Vec<Result<TelemetryRecord, DecodeError>> = if req.parallel {
                chunk.par_iter().map(|s| self.decode_one(s)).collect()
            } else {
                chunk.iter().map(|s| self.decode_one(s)).collect()
            };

            for (local_idx, (input, outcome)) in chunk.iter().zip(outcomes).enumerate() {
                let index = global_offset + local_idx;
                if let Err(err) = &outcome {
                    debug!(index, input = %input, error = %err, "record failed to decode");
                    match req.error_mode {
                        ErrorMode::Collect => {}
                        ErrorMode::Skip => continue,
                        ErrorMode::Throw => {
                            return Err(BatchDecodeError::ItemFailed {
                                index,
                                source: err.clone(),
                            });
                        }
                    }
                }
                items.push(BatchItem {
                    index,
                    input: input.clone(),
                    outcome,
                });
            }

            global_offset += chunk.len();

            if let Some(cb) = &req.on_progress {
                cb(global_offset, total_input);
            }
        }

        let result = BatchResult { items, total_input };
        info!(
            "BatchEngine: complete, {} decoded, {} errors",
            result.decoded_count(),
            result.error_count()
        );
        Ok(result)
    }
}
