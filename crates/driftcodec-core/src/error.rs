//! Error types for the DriftCodec decode pipeline.

use thiserror::Error;

/// Errors that can occur while decoding a single record.
///
/// The layout carries no checksum and the decoder performs no range
/// validation, so a short buffer is the only way a decode can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Truncated input: need {needed} bytes, got {got}")]
    TruncatedInput { needed: usize, got: usize },
}

/// Errors that can occur during batch decoding.
#[derive(Debug, Error)]
pub enum BatchDecodeError {
    #[error("Decode error at index {index}: {source}")]
    ItemFailed {
        index: usize,
        #[source]
        source: DecodeError,
    },

    #[error("{0}")]
    Other(String),
}
