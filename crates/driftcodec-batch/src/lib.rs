//! # driftcodec-batch
//!
//! Batch decoding of hex-encoded telemetry records with per-item failure
//! isolation. One bad record never aborts the batch unless the caller asks
//! for [`ErrorMode::Throw`].
//!
//! ## Features
//! - Results returned in input order, one item per input
//! - Memory-bounded chunking (default 10,000 records per chunk)
//! - CPU-parallel decoding via Rayon
//! - Progress callbacks between chunks
//! - Three error modes: Collect, Skip, Throw
//!
//! ## Usage
//! ```
//! use driftcodec_batch::{BatchEngine, BatchRequest};
//!
//! let engine = BatchEngine::new();
//! let result = engine
//!     .decode(BatchRequest::new(["60dea8c0744cf300185abdc04d8c", "00"]))
//!     .unwrap();
//! assert_eq!(result.decoded_count(), 1);
//! assert_eq!(result.error_count(), 1);
//! ```

pub mod engine;
pub mod request;

pub use engine::{BatchEngine, BatchItem, BatchResult};
pub use request::{BatchRequest, ErrorMode};
