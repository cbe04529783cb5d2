//! Batch decode request configuration.

/// Controls how the batch engine reacts to individual decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Keep one item per input, failed or not. The HTTP endpoint and CLI use this.
    #[default]
    Collect,
    /// Drop failed items; survivors keep their original index.
    Skip,
    /// Abort the batch on the first failing input.
    Throw,
}

/// Configuration for a batch decode job.
pub struct BatchRequest {
    /// Hex-encoded records, in the order results must be returned
    pub inputs: Vec<String>,
    /// Number of Rayon workers (0 = global pool)
    pub concurrency: usize,
    /// Max records per chunk; progress is reported between chunks
    pub chunk_size: usize,
    /// Decode chunks in parallel (false = on the calling thread)
    pub parallel: bool,
    /// How to handle decode errors
    pub error_mode: ErrorMode,
    /// Optional progress callback: (processed, total)
    pub on_progress: Option<Box<dyn Fn(usize, usize) + Send + Sync>>,
}

impl BatchRequest {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            concurrency: 0,
            chunk_size: 10_000,
            parallel: true,
            error_mode: ErrorMode::Collect,
            on_progress: None,
        }
    }

    pub fn chunk_size(mut self, n: usize) -> Self {
        self.chunk_size = n;
        self
    }

    pub fn concurrency(mut self, n: usize) -> Self {
        self.concurrency = n;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    pub fn on_progress<F: Fn(usize, usize) + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }
}
