//! # driftcodec-observability
//!
//! Structured logging and OpenTelemetry metrics for DriftCodec services.
//!
//! ## Built-in metrics
//! - `driftcodec.records_decoded`: counter
//! - `driftcodec.decode_errors`: counter, tagged with error_type
//! - `driftcodec.batch_latency_ms`: histogram
//! - `driftcodec.batch_size`: histogram
//!
//! ## Structured logging
//! JSON or human-readable logs via `tracing-subscriber`, with log levels
//! configurable per component.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::DecodeMetrics;
pub use tracing_setup::{init_tracing, LogConfig};
